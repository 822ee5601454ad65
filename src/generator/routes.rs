use askama::Template;
use std::collections::BTreeMap;

use super::reference::ReferenceStyle;
use super::resource::{plan_routes, TrafficClass};
use super::templates::ControllerRoutesTemplate;
use crate::config::GeneratorConfig;
use crate::error::{Result, SynthError};
use crate::model::{Controller, ControllerTree};
use crate::sink::RouteSink;

/// Generated text per traffic class, ready to be appended to its routes file.
pub type RouteBlocks = BTreeMap<TrafficClass, String>;

/// Result of a generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOutput {
    /// Resources that were appended to, in the order they were written
    pub updated: Vec<String>,
}

/// A code generator driven by the controller tree.
pub trait Generator {
    /// Generate output for `tree` and hand it to `sink`.
    fn output(&self, tree: &ControllerTree, sink: &mut dyn RouteSink) -> Result<GeneratorOutput>;

    /// Kinds of artifacts this generator produces.
    fn types(&self) -> &'static [&'static str];
}

/// Turns controllers into route registrations for the `api` and `web` routes files.
///
/// Holds no state besides the reference style, so one instance can serve
/// any number of runs, including concurrent ones.
#[derive(Debug, Clone)]
pub struct RouteSynthesizer {
    style: ReferenceStyle,
}

impl RouteSynthesizer {
    /// Create a synthesizer for an application with the given root
    /// controller namespace (`None` or empty selects class references).
    pub fn new(root_namespace: Option<&str>) -> Self {
        Self::with_style(ReferenceStyle::from_root_namespace(root_namespace))
    }

    pub fn with_style(style: ReferenceStyle) -> Self {
        Self { style }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.root_namespace.as_deref())
    }

    pub fn style(&self) -> &ReferenceStyle {
        &self.style
    }

    /// Generate the text for every traffic class that has routes.
    ///
    /// Each controller's block is preceded by a blank line so appended text
    /// stays separated from what the routes file already holds, and every
    /// block of text ends with a single line break. Classes without any
    /// routes are left out; an empty tree yields an empty map.
    pub fn synthesize(&self, tree: &ControllerTree) -> Result<RouteBlocks> {
        let mut fragments: BTreeMap<TrafficClass, Vec<String>> = BTreeMap::new();
        for controller in tree.controllers() {
            let routes = self.build_routes(controller)?;
            if routes.is_empty() {
                tracing::debug!(
                    controller = controller.identifier(),
                    "controller has no routable methods"
                );
                continue;
            }
            fragments
                .entry(TrafficClass::of(controller))
                .or_default()
                .push(routes);
        }

        Ok(fragments
            .into_iter()
            .map(|(class, fragments)| {
                let mut text = String::new();
                for fragment in fragments {
                    text.push_str("\n\n");
                    text.push_str(&fragment);
                }
                text.push('\n');
                (class, text)
            })
            .collect())
    }

    /// Render the route registrations for a single controller, without a
    /// trailing line break. Returns an empty string for a controller without
    /// methods.
    pub fn build_routes(&self, controller: &Controller) -> Result<String> {
        let plan = plan_routes(controller);
        for method in &plan.ignored {
            tracing::warn!(
                controller = controller.identifier(),
                method = method.as_str(),
                "form action has no route on an API resource"
            );
        }
        if plan.is_empty() {
            return Ok(String::new());
        }

        tracing::debug!(
            controller = controller.identifier(),
            class = %plan.class,
            slug = plan.slug.as_str(),
            resource = plan.resource.is_some(),
            explicit = plan.explicit.len(),
            "building routes"
        );

        let rendered = ControllerRoutesTemplate::from_plan(&plan, controller.identifier(), &self.style)
            .render()
            .map_err(|source| SynthError::Render {
                controller: controller.identifier().to_string(),
                source,
            })?;
        Ok(rendered.trim_end().to_string())
    }
}

impl Generator for RouteSynthesizer {
    /// Append each traffic class's routes to `routes/<class>.php`.
    ///
    /// Stops at the first sink failure; resources written before it stay written.
    fn output(&self, tree: &ControllerTree, sink: &mut dyn RouteSink) -> Result<GeneratorOutput> {
        let mut output = GeneratorOutput::default();
        if tree.is_empty() {
            return Ok(output);
        }

        for (class, text) in self.synthesize(tree)? {
            let resource = class.resource_name();
            sink.append(&resource, &text)
                .map_err(|source| SynthError::Sink {
                    resource: resource.clone(),
                    source,
                })?;
            tracing::info!(resource = resource.as_str(), "appended routes");
            output.updated.push(resource);
        }
        Ok(output)
    }

    fn types(&self) -> &'static [&'static str] {
        &["routes"]
    }
}
