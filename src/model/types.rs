use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

/// Opaque body of a controller method.
///
/// The route generator only cares about method names; whatever statements the
/// upstream definition attached to the method are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MethodDescriptor {
    pub body: Value,
}

impl MethodDescriptor {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// A controller exposed by the application, as built by the upstream parser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawController")]
pub struct Controller {
    identifier: String,
    prefix: String,
    api_resource: bool,
    methods: IndexMap<String, MethodDescriptor>,
}

impl Controller {
    /// Create a web controller with no methods.
    ///
    /// The prefix is derived from the last namespace segment of `identifier`
    /// with any trailing `Controller` removed.
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let prefix = derive_prefix(&identifier);
        Self {
            identifier,
            prefix,
            api_resource: false,
            methods: IndexMap::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn api_resource(mut self, api_resource: bool) -> Self {
        self.api_resource = api_resource;
        self
    }

    /// Add a method; re-adding a name replaces its descriptor but keeps its position.
    pub fn with_method(mut self, name: impl Into<String>, descriptor: MethodDescriptor) -> Self {
        self.methods.insert(name.into(), descriptor);
        self
    }

    /// Fully-qualified class name, e.g. `App\Http\Controllers\PostController`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_api_resource(&self) -> bool {
        self.api_resource
    }

    pub fn methods(&self) -> &IndexMap<String, MethodDescriptor> {
        &self.methods
    }

    /// Method names in declaration order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

fn derive_prefix(identifier: &str) -> String {
    let basename = identifier.rsplit('\\').next().unwrap_or(identifier);
    match basename.strip_suffix("Controller") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => basename.to_string(),
    }
}

/// Manifest shape of a controller; `prefix` and `api_resource` may be omitted.
#[derive(Debug, Deserialize)]
struct RawController {
    #[serde(rename = "class")]
    identifier: String,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    api_resource: bool,
    #[serde(default)]
    methods: IndexMap<String, MethodDescriptor>,
}

impl From<RawController> for Controller {
    fn from(raw: RawController) -> Self {
        let prefix = raw
            .prefix
            .unwrap_or_else(|| derive_prefix(&raw.identifier));
        Controller {
            identifier: raw.identifier,
            prefix,
            api_resource: raw.api_resource,
            methods: raw.methods,
        }
    }
}

/// Ordered sequence of controllers handed to the generators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ControllerTree {
    #[serde(default)]
    controllers: Vec<Controller>,
}

impl ControllerTree {
    pub fn new(controllers: Vec<Controller>) -> Self {
        Self { controllers }
    }

    pub fn push(&mut self, controller: Controller) {
        self.controllers.push(controller);
    }

    pub fn controllers(&self) -> &[Controller] {
        &self.controllers
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl FromIterator<Controller> for ControllerTree {
    fn from_iter<I: IntoIterator<Item = Controller>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
