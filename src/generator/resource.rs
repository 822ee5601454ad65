use std::fmt;

use super::kebab::kebab_case;
use crate::model::Controller;

/// Every conventional action of a resource controller, in canonical order.
pub const RESOURCE_METHODS: [&str; 7] = [
    "index", "create", "store", "show", "edit", "update", "destroy",
];

/// Conventional actions of an API resource: no `create`/`edit` form pages.
pub const API_RESOURCE_METHODS: [&str; 5] = ["index", "store", "show", "update", "destroy"];

/// Missing-action count from which a registration switches from
/// `->except(...)` to `->only(...)`.
pub const EXCEPT_LIMIT: usize = 4;

/// Routes file a controller's registrations are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrafficClass {
    Api,
    Web,
}

impl TrafficClass {
    pub fn of(controller: &Controller) -> Self {
        if controller.is_api_resource() {
            TrafficClass::Api
        } else {
            TrafficClass::Web
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficClass::Api => "api",
            TrafficClass::Web => "web",
        }
    }

    /// Conventional actions covered by this class's aggregate registration.
    pub fn conventional_methods(self) -> &'static [&'static str] {
        match self {
            TrafficClass::Api => &API_RESOURCE_METHODS,
            TrafficClass::Web => &RESOURCE_METHODS,
        }
    }

    /// Facade method used for the aggregate registration.
    pub fn registrar(self) -> &'static str {
        match self {
            TrafficClass::Api => "apiResource",
            TrafficClass::Web => "resource",
        }
    }

    /// Resource name handed to the output sink, e.g. `routes/api.php`.
    pub fn resource_name(self) -> String {
        format!("routes/{}.php", self.as_str())
    }
}

impl fmt::Display for TrafficClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrowing applied to an aggregate registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// `->except(...)`: conventional actions the controller lacks.
    Except(Vec<String>),
    /// `->only(...)`: conventional actions the controller has.
    Only(Vec<String>),
}

impl Modifier {
    /// Pick the modifier for the given present/missing split.
    ///
    /// The switch is on the absolute number of missing actions, not on which
    /// list is shorter; generated files depend on that exact shape.
    pub fn choose(present: &[&str], missing: &[&str]) -> Option<Self> {
        if missing.is_empty() {
            None
        } else if missing.len() < EXCEPT_LIMIT {
            Some(Modifier::Except(to_owned(missing)))
        } else {
            Some(Modifier::Only(to_owned(present)))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Except(_) => "except",
            Modifier::Only(_) => "only",
        }
    }

    pub fn methods(&self) -> &[String] {
        match self {
            Modifier::Except(methods) | Modifier::Only(methods) => methods,
        }
    }
}

fn to_owned(methods: &[&str]) -> Vec<String> {
    methods.iter().map(|m| m.to_string()).collect()
}

/// Aggregate registration of a controller's conventional actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePlan {
    /// Present conventional actions, in declaration order.
    pub methods: Vec<String>,
    pub modifier: Option<Modifier>,
}

/// A standalone `GET` registration for a non-conventional action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitRoute {
    pub method: String,
    /// `<slug>/<kebab(method)>`
    pub path: String,
}

/// Everything the route generator will emit for one controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub class: TrafficClass,
    pub slug: String,
    pub resource: Option<ResourcePlan>,
    pub explicit: Vec<ExplicitRoute>,
    /// Form actions declared on an API resource; they get no route at all.
    pub ignored: Vec<String>,
}

impl RoutePlan {
    pub fn is_empty(&self) -> bool {
        self.resource.is_none() && self.explicit.is_empty()
    }
}

/// Work out which registrations a controller needs.
pub fn plan_routes(controller: &Controller) -> RoutePlan {
    let class = TrafficClass::of(controller);
    let conventional = class.conventional_methods();
    let slug = kebab_case(controller.prefix());

    let present: Vec<&str> = controller
        .method_names()
        .filter(|m| conventional.contains(m))
        .collect();

    let resource = if present.is_empty() {
        None
    } else {
        let missing: Vec<&str> = conventional
            .iter()
            .copied()
            .filter(|m| !present.contains(m))
            .collect();
        Some(ResourcePlan {
            methods: to_owned(&present),
            modifier: Modifier::choose(&present, &missing),
        })
    };

    let explicit = controller
        .method_names()
        .filter(|m| !RESOURCE_METHODS.contains(m))
        .map(|m| ExplicitRoute {
            method: m.to_string(),
            path: format!("{slug}/{}", kebab_case(m)),
        })
        .collect();

    let ignored = controller
        .method_names()
        .filter(|m| RESOURCE_METHODS.contains(m) && !conventional.contains(m))
        .map(str::to_string)
        .collect();

    RoutePlan {
        class,
        slug,
        resource,
        explicit,
        ignored,
    }
}
