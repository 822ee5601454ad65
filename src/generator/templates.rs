use askama::Template;

use super::reference::{php_string_literal, ReferenceStyle};
use super::resource::{Modifier, RoutePlan};

/// Aggregate registration statement, already rendered to PHP fragments.
#[derive(Debug, Clone)]
pub struct ResourceStatement {
    /// `resource` or `apiResource`
    pub registrar: &'static str,
    /// Quoted slug
    pub slug: String,
    /// Controller reference
    pub controller: String,
    /// `->except(...)`/`->only(...)` suffix, or empty
    pub modifier: String,
}

/// Explicit `Route::get` statement.
#[derive(Debug, Clone)]
pub struct ExplicitStatement {
    /// Quoted path
    pub path: String,
    /// Action reference
    pub action: String,
}

/// Template data for one controller's block of route registrations.
#[derive(Template)]
#[template(path = "routes.php.txt", escape = "none")]
pub struct ControllerRoutesTemplate {
    /// Aggregate registration, if the controller has conventional actions
    pub resource: Option<ResourceStatement>,
    /// Explicit registrations in declaration order
    pub routes: Vec<ExplicitStatement>,
}

impl ControllerRoutesTemplate {
    /// Turn a route plan into template data using the given reference style.
    pub fn from_plan(plan: &RoutePlan, identifier: &str, style: &ReferenceStyle) -> Self {
        let resource = plan.resource.as_ref().map(|resource| ResourceStatement {
            registrar: plan.class.registrar(),
            slug: php_string_literal(&plan.slug),
            controller: style.controller(identifier),
            modifier: resource
                .modifier
                .as_ref()
                .map(render_modifier)
                .unwrap_or_default(),
        });
        let routes = plan
            .explicit
            .iter()
            .map(|route| ExplicitStatement {
                path: php_string_literal(&route.path),
                action: style.action(identifier, &route.method),
            })
            .collect();
        Self { resource, routes }
    }
}

/// Render a modifier as a chained call, e.g. `->except('create', 'edit')`.
pub fn render_modifier(modifier: &Modifier) -> String {
    let args = modifier
        .methods()
        .iter()
        .map(|m| php_string_literal(m))
        .collect::<Vec<_>>()
        .join(", ");
    format!("->{}({args})", modifier.name())
}
