//! Export pipeline: selectors → types → templates → output.
//!
//! ```text
//! ExportRequest → load catalogs → collect types → render fragment → write outputs
//! ```

use std::path::{Path, PathBuf};

use crate::args::NameComparison;
use crate::catalog::{load_manifest, manifest_files, Catalog, CatalogError, TypeInfo};
use crate::cli::ExportRequest;
use crate::export::output::write_outputs;
use crate::export::writer::FragmentWriter;
use crate::export::{ExportError, TemplateProvider};
use crate::logging::Reporter;
use crate::pattern::{NamespacePattern, Pattern};

/// Build a catalog from manifest files and directories.
///
/// Each path is prepended in turn, so later paths shadow earlier ones.
/// Failures are reported and skipped.
pub fn load_catalog(paths: &[PathBuf], reporter: &mut Reporter) -> Catalog {
    let mut catalog = Catalog::default();

    for path in paths {
        if path.is_dir() {
            let files = match manifest_files(path) {
                Ok(files) => files,
                Err(e) => {
                    reporter.error(format!("[ERROR]\t{e}"));
                    continue;
                }
            };
            for file in files {
                load_one(&mut catalog, &file, Some(path), reporter);
            }
        } else if path.is_file() {
            load_one(&mut catalog, path, None, reporter);
        } else {
            let e = CatalogError::NotFound { path: path.clone() };
            reporter.error(format!("[ERROR]\t{e}"));
        }
    }

    catalog
}

fn load_one(catalog: &mut Catalog, file: &Path, dir: Option<&Path>, reporter: &mut Reporter) {
    let module = match load_manifest(file) {
        Ok(module) => module,
        Err(e) => {
            reporter.error(format!(
                "[ERROR]\tAn error occurred while loading catalog from file \"{}\": {e}",
                file.display()
            ));
            return;
        }
    };

    let full_name = module.full_name.clone();
    match dir {
        Some(dir) => reporter.status(format!(
            "Successfully loaded catalog \"{full_name}\" from file \"{}\" in directory \"{}\"",
            file.display(),
            dir.display()
        )),
        None => reporter.status(format!(
            "Successfully loaded catalog \"{full_name}\" from file \"{}\"",
            file.display()
        )),
    }

    if !catalog.prepend_if_unique(module) {
        tracing::debug!(module = %full_name, "catalog already loaded, skipped");
    }
}

/// One export run over a loaded catalog.
pub struct Exporter<'a> {
    request: &'a ExportRequest,
    catalog: &'a Catalog,
}

impl<'a> Exporter<'a> {
    pub fn new(request: &'a ExportRequest, catalog: &'a Catalog) -> Self {
        Self { request, catalog }
    }

    /// Collect types from every selector, in selector order.
    ///
    /// Parameters are tried as qualified names first, then as name patterns.
    /// Namespace and module selectors add element types only. The same type
    /// may appear more than once.
    pub fn collect_types(&self, reporter: &mut Reporter) -> Result<Vec<&'a TypeInfo>, ExportError> {
        let comparison = self.request.comparison();
        let mut types = Vec::new();

        let mut name_patterns = Vec::new();
        for arg in &self.request.type_names {
            if let Some(ty) = self.catalog.resolve_qualified(arg, comparison) {
                reporter.status(format!(
                    "Successfully resolved type \"{arg}\" => \"{}\"",
                    ty.full_name()
                ));
                types.push(ty);
                continue;
            }
            name_patterns.push(Pattern::parse(arg).map_err(|e| ExportError::pattern(arg, e))?);
        }
        if !name_patterns.is_empty() {
            // Simple type names always match ignoring case.
            types.extend(self.catalog.resolve_by_name(|name| {
                name_patterns
                    .iter()
                    .any(|p| p.is_match(name, NameComparison::IgnoreCase))
            }));
        }

        let namespaces = self
            .request
            .namespaces
            .iter()
            .map(|ns| NamespacePattern::parse(ns).map_err(|e| ExportError::pattern(ns, e)))
            .collect::<Result<Vec<_>, _>>()?;
        if !namespaces.is_empty() {
            types.extend(self.catalog.resolve_namespace_elements(|ns| {
                namespaces.iter().any(|p| p.is_match(ns, comparison))
            }));
        }

        let modules = self
            .request
            .modules
            .iter()
            .map(|m| Pattern::parse(m).map_err(|e| ExportError::pattern(m, e)))
            .collect::<Result<Vec<_>, _>>()?;
        if !modules.is_empty() {
            types.extend(self.catalog.resolve_module_elements(|module| {
                modules.iter().any(|p| {
                    p.is_match(&module.full_name, comparison) || p.is_match(&module.name, comparison)
                })
            }));
        }

        tracing::debug!(count = types.len(), "types collected");
        Ok(types)
    }

    /// Append the template of each type to `fragment`.
    ///
    /// Missing templates and provider failures are reported, not fatal.
    pub fn render(
        &self,
        types: &[&TypeInfo],
        provider: &dyn TemplateProvider,
        fragment: &mut FragmentWriter,
        reporter: &mut Reporter,
    ) {
        for ty in types {
            match provider.find_template(ty) {
                Ok(Some(markup)) => {
                    fragment.write_comment(&format!("  {}  ", ty.qualified_name()));
                    fragment.write_markup(&markup);
                    reporter.status(format!(
                        "Successfully retrieved template for type \"{}\"",
                        ty.full_name()
                    ));
                }
                Ok(None) => reporter.status(format!(
                    "[ERROR]\tFailed to retrieve template for type \"{}\"",
                    ty.full_name()
                )),
                Err(e) => reporter.error(format!(
                    "[ERROR]\tFailed to export type \"{}\" due to an error:\n{e}",
                    ty.full_name()
                )),
            }
        }
    }

    /// Collect, render and write.
    ///
    /// Whatever was rendered is written out even when collection fails; the
    /// collection error is returned afterwards.
    pub fn run(&self, provider: &dyn TemplateProvider, reporter: &mut Reporter) -> Result<(), ExportError> {
        let mut fragment = FragmentWriter::new();

        let collected = self.collect_types(reporter).and_then(|types| {
            if types.is_empty() {
                return Err(ExportError::NothingToExport);
            }
            self.render(&types, provider, &mut fragment, reporter);
            Ok(())
        });

        let written = write_outputs(fragment.as_str(), self.request, reporter);
        collected.and(written)
    }
}
