//! Type catalog: the modules and exported types the exporter can search.
//!
//! Modules come from manifest files (see [`manifest`]). Search order matters:
//! modules loaded later are prepended, so they shadow earlier ones in
//! first-match lookups.

pub mod manifest;

pub use manifest::{is_manifest, load_manifest, manifest_files, CatalogError};

use crate::args::NameComparison;

/// An exported type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    pub namespace: Option<String>,
    /// Full name of the owning module.
    pub module: String,
    /// Derives from one of the framework's element base types.
    pub element: bool,
    /// Default template markup, if the framework has one for this type.
    pub template: Option<String>,
}

impl TypeInfo {
    /// `Namespace.Name`, or just `Name` without a namespace.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// `Namespace.Name, Module Full Name`.
    pub fn qualified_name(&self) -> String {
        format!("{}, {}", self.full_name(), self.module)
    }

    fn has_namespace(&self) -> bool {
        self.namespace.as_deref().is_some_and(|ns| !ns.trim().is_empty())
    }
}

/// A loaded module ("assembly").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub full_name: String,
    pub types: Vec<TypeInfo>,
}

impl Module {
    pub fn elements(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.iter().filter(|t| t.element)
    }

    pub fn is_named(&self, name: &str, comparison: NameComparison) -> bool {
        comparison.equals(&self.full_name, name) || comparison.equals(&self.name, name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    fn contains(&self, module: &Module) -> bool {
        self.modules.iter().any(|m| m.full_name == module.full_name)
    }

    /// Put `module` first in search order. Returns false if already loaded.
    pub fn prepend_if_unique(&mut self, module: Module) -> bool {
        if self.contains(&module) {
            return false;
        }
        self.modules.insert(0, module);
        true
    }

    /// Put `module` last in search order. Returns false if already loaded.
    pub fn append_if_unique(&mut self, module: Module) -> bool {
        if self.contains(&module) {
            return false;
        }
        self.modules.push(module);
        true
    }

    pub fn exported_types(&self) -> impl Iterator<Item = &TypeInfo> {
        self.modules.iter().flat_map(|m| m.types.iter())
    }

    pub fn resolve_all<P>(&self, mut predicate: P) -> Vec<&TypeInfo>
    where
        P: FnMut(&TypeInfo) -> bool,
    {
        self.exported_types().filter(|t| predicate(t)).collect()
    }

    /// Types whose simple or full name passes `predicate`.
    pub fn resolve_by_name<P>(&self, mut predicate: P) -> Vec<&TypeInfo>
    where
        P: FnMut(&str) -> bool,
    {
        self.resolve_all(|t| predicate(t.name.as_str()) || predicate(t.full_name().as_str()))
    }

    /// Element types with a non-blank namespace that passes `predicate`.
    pub fn resolve_namespace_elements<P>(&self, mut predicate: P) -> Vec<&TypeInfo>
    where
        P: FnMut(&str) -> bool,
    {
        self.resolve_all(|t| {
            t.element
                && t.has_namespace()
                && t.namespace.as_deref().is_some_and(&mut predicate)
        })
    }

    /// Element types of every module passing `predicate`.
    pub fn resolve_module_elements<P>(&self, mut predicate: P) -> Vec<&TypeInfo>
    where
        P: FnMut(&Module) -> bool,
    {
        self.modules
            .iter()
            .filter(|m| predicate(m))
            .flat_map(|m| m.elements())
            .collect()
    }

    /// Resolve `Namespace.Name` or `Namespace.Name, Module`.
    ///
    /// Only namespace-qualified names resolve here; bare names go through
    /// [`Catalog::resolve_by_name`].
    pub fn resolve_qualified(&self, name: &str, comparison: NameComparison) -> Option<&TypeInfo> {
        let (type_part, module_part) = match name.split_once(',') {
            Some((ty, module)) => (ty.trim(), Some(module.trim())),
            None => (name.trim(), None),
        };
        if !type_part.contains('.') {
            return None;
        }

        self.modules
            .iter()
            .filter(|m| module_part.map_or(true, |wanted| m.is_named(wanted, comparison)))
            .flat_map(|m| m.types.iter())
            .find(|t| t.has_namespace() && comparison.equals(&t.full_name(), type_part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str, namespace: Option<&str>, module: &str, element: bool) -> TypeInfo {
        TypeInfo {
            name: name.to_string(),
            namespace: namespace.map(String::from),
            module: module.to_string(),
            element,
            template: None,
        }
    }

    fn module(name: &str, types: Vec<TypeInfo>) -> Module {
        Module {
            name: name.to_string(),
            full_name: format!("{name}, Version=1.0"),
            types,
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            module(
                "Framework",
                vec![
                    ty("Button", Some("Ui.Controls"), "Framework, Version=1.0", true),
                    ty("ComboBox", Some("Ui.Controls"), "Framework, Version=1.0", true),
                    ty("Thumb", Some("Ui.Controls.Primitives"), "Framework, Version=1.0", true),
                    ty("Converter", Some("Ui.Data"), "Framework, Version=1.0", false),
                    ty("Loose", None, "Framework, Version=1.0", true),
                ],
            ),
            module(
                "Extras",
                vec![ty("Dial", Some("Extras.Ui"), "Extras, Version=1.0", true)],
            ),
        ])
    }

    fn names(types: Vec<&TypeInfo>) -> Vec<&str> {
        types.into_iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn prepend_shadows_and_ignores_duplicates() {
        let mut catalog = sample();
        let newer = module("Newer", vec![]);
        assert!(catalog.prepend_if_unique(newer.clone()));
        assert!(!catalog.prepend_if_unique(newer));
        assert!(!catalog.append_if_unique(module("Extras", vec![])));
        assert_eq!(catalog.modules()[0].name, "Newer");
        assert_eq!(catalog.modules().len(), 3);
    }

    #[test]
    fn resolve_by_simple_or_full_name() {
        let catalog = sample();
        assert_eq!(names(catalog.resolve_by_name(|n| n == "Button")), vec!["Button"]);
        assert_eq!(
            names(catalog.resolve_by_name(|n| n == "Ui.Controls.ComboBox")),
            vec!["ComboBox"]
        );
    }

    #[test]
    fn namespace_elements_skip_non_elements_and_blank_namespaces() {
        let catalog = sample();
        let all = catalog.resolve_namespace_elements(|_| true);
        assert_eq!(names(all), vec!["Button", "ComboBox", "Thumb", "Dial"]);

        let nested = catalog.resolve_namespace_elements(|ns| ns.starts_with("Ui.Controls"));
        assert_eq!(names(nested), vec!["Button", "ComboBox", "Thumb"]);
    }

    #[test]
    fn module_elements() {
        let catalog = sample();
        let extras = catalog.resolve_module_elements(|m| m.is_named("extras", NameComparison::IgnoreCase));
        assert_eq!(names(extras), vec!["Dial"]);
        let framework = catalog.resolve_module_elements(|m| m.is_named("Framework, Version=1.0", NameComparison::Ordinal));
        assert_eq!(framework.len(), 4);
    }

    #[test]
    fn qualified_resolution() {
        let catalog = sample();
        let found = catalog.resolve_qualified("Ui.Controls.Button", NameComparison::Ordinal);
        assert_eq!(found.map(|t| t.name.as_str()), Some("Button"));

        assert!(catalog
            .resolve_qualified("ui.controls.button", NameComparison::Ordinal)
            .is_none());
        assert!(catalog
            .resolve_qualified("ui.controls.button", NameComparison::IgnoreCase)
            .is_some());

        assert!(catalog.resolve_qualified("Button", NameComparison::Ordinal).is_none());
        assert!(catalog
            .resolve_qualified("Extras.Ui.Dial, Extras", NameComparison::Ordinal)
            .is_some());
        assert!(catalog
            .resolve_qualified("Extras.Ui.Dial, Framework", NameComparison::Ordinal)
            .is_none());
    }

    #[test]
    fn qualified_name_includes_module() {
        let t = ty("Button", Some("Ui.Controls"), "Framework, Version=1.0", true);
        assert_eq!(t.qualified_name(), "Ui.Controls.Button, Framework, Version=1.0");
        assert_eq!(ty("Loose", None, "M", true).full_name(), "Loose");
    }
}
