use super::types::ControllerTree;
use anyhow::Context;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

/// Load a controller manifest from a YAML or JSON file.
///
/// The format is chosen by extension: `.yaml`/`.yml` are read as YAML,
/// anything else as JSON.
pub fn load_tree(path: &Path) -> anyhow::Result<ControllerTree> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read controller manifest: {}", path.display()))?;
    let tree = if is_yaml(path) {
        load_tree_from_yaml(&content)
    } else {
        load_tree_from_json(&content)
    }
    .with_context(|| format!("Failed to parse controller manifest: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        controllers = tree.len(),
        "loaded controller manifest"
    );
    Ok(tree)
}

pub fn load_tree_from_yaml(content: &str) -> anyhow::Result<ControllerTree> {
    if content.trim().is_empty() {
        return Ok(ControllerTree::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub fn load_tree_from_json(content: &str) -> anyhow::Result<ControllerTree> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_manifest_preserves_method_order() {
        let tree = load_tree_from_yaml(
            r#"
controllers:
  - class: App\Http\Controllers\PostController
    methods:
      show: { find: id }
      export: ~
      index: ~
"#,
        )
        .unwrap();
        let controller = &tree.controllers()[0];
        assert_eq!(controller.identifier(), "App\\Http\\Controllers\\PostController");
        assert_eq!(controller.prefix(), "Post");
        assert!(!controller.is_api_resource());
        let names: Vec<_> = controller.method_names().collect();
        assert_eq!(names, ["show", "export", "index"]);
    }

    #[test]
    fn test_json_manifest_with_explicit_prefix() {
        let tree = load_tree_from_json(
            r#"{"controllers": [{"class": "Api\\Orders", "prefix": "OrderLine", "api_resource": true, "methods": {"index": null}}]}"#,
        )
        .unwrap();
        let controller = &tree.controllers()[0];
        assert_eq!(controller.prefix(), "OrderLine");
        assert!(controller.is_api_resource());
    }

    #[test]
    fn test_empty_yaml_is_an_empty_tree() {
        assert!(load_tree_from_yaml("").unwrap().is_empty());
        assert!(load_tree_from_yaml("controllers: []").unwrap().is_empty());
    }
}
