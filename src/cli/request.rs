use std::path::PathBuf;

use crate::args::{ArgName, ArgSet, KindMask, NameComparison};
use crate::cli;
use crate::config::Config;

/// Everything the exporter needs to know, read once from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    /// Parameters: type names or `regex:` patterns.
    pub type_names: Vec<String>,
    /// `-N` values, `+` suffix still attached.
    pub namespaces: Vec<String>,
    /// `-A` values.
    pub modules: Vec<String>,
    /// Config catalog paths followed by `-L` values.
    pub catalogs: Vec<PathBuf>,
    /// `-o` values. Empty means stdout.
    pub outputs: Vec<PathBuf>,
    pub ignore_case: bool,
    pub open_outputs: bool,
    /// Suppress status and error messages.
    pub quiet: bool,
}

impl ExportRequest {
    pub fn from_args(args: &ArgSet, config: &Config) -> Self {
        let values = |names: &[ArgName]| -> Vec<String> {
            args.all_values(KindMask::SWITCH, names)
                .into_iter()
                .map(String::from)
                .collect()
        };

        let outputs: Vec<PathBuf> = values(&cli::output()).into_iter().map(PathBuf::from).collect();

        let include_messages = config.defaults.include_messages
            || args.contains_any(KindMask::OPTION, &cli::include_messages());
        let quiet = (outputs.is_empty() && !include_messages)
            || args.contains_any(KindMask::SWITCH, &cli::quiet());

        let catalogs = config
            .catalog
            .paths
            .iter()
            .cloned()
            .chain(values(&cli::load_assembly()).into_iter().map(PathBuf::from))
            .collect();

        Self {
            type_names: args
                .find_all_of_kind(KindMask::PARAMETER)
                .into_iter()
                .map(|r| r.name().to_string())
                .collect(),
            namespaces: values(&cli::namespace()),
            modules: values(&cli::assembly()),
            catalogs,
            outputs,
            ignore_case: config.defaults.ignore_case
                || args.contains_any(KindMask::SWITCH, &cli::ignore_case()),
            open_outputs: args.contains_any(KindMask::SWITCH, &cli::open()),
            quiet,
        }
    }

    /// Comparison for namespace, module and qualified type lookups.
    pub fn comparison(&self) -> NameComparison {
        NameComparison::from_ignore_case(self.ignore_case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;

    fn request(tokens: &[&str]) -> ExportRequest {
        request_with(tokens, &Config::default())
    }

    fn request_with(tokens: &[&str], config: &Config) -> ExportRequest {
        let args = ArgSet::parse(tokens.iter().copied(), &cli::implicit_capture());
        ExportRequest::from_args(&args, config)
    }

    #[test]
    fn stdout_output_is_quiet_by_default() {
        let r = request(&["Button"]);
        assert!(r.outputs.is_empty());
        assert!(r.quiet);
    }

    #[test]
    fn include_messages_must_be_an_option() {
        assert!(!request(&["Button", "--include-messages"]).quiet);
        assert!(request(&["Button", "-include-messages"]).quiet);
    }

    #[test]
    fn file_output_is_not_quiet_unless_asked() {
        let r = request(&["Button", "-o", "a.xml", "--output=b.xml"]);
        assert_eq!(r.outputs, vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")]);
        assert!(!r.quiet);
        assert!(request(&["Button", "-qo", "a.xml"]).quiet);
    }

    #[test]
    fn collects_every_selector() {
        let r = request(&[
            "Button",
            "regex:^Tab",
            "-N",
            "Ui.Controls+",
            "--namespace=Ui.Data",
            "-A",
            "Extras",
            "-L",
            "catalogs",
            "-iO",
        ]);
        assert_eq!(r.type_names, vec!["Button", "regex:^Tab"]);
        assert_eq!(r.namespaces, vec!["Ui.Controls+", "Ui.Data"]);
        assert_eq!(r.modules, vec!["Extras"]);
        assert_eq!(r.catalogs, vec![PathBuf::from("catalogs")]);
        assert!(r.ignore_case);
        assert!(r.open_outputs);
        assert_eq!(r.comparison(), NameComparison::IgnoreCase);
    }

    #[test]
    fn config_defaults_add_to_switches() {
        let config = Config {
            defaults: Defaults {
                ignore_case: true,
                include_messages: true,
                ..Defaults::default()
            },
            catalog: crate::config::CatalogConfig {
                paths: vec![PathBuf::from("/etc/catalogs")],
            },
        };
        let r = request_with(&["Button", "-L", "extra.toml"], &config);
        assert!(r.ignore_case);
        assert!(!r.quiet);
        assert_eq!(
            r.catalogs,
            vec![PathBuf::from("/etc/catalogs"), PathBuf::from("extra.toml")]
        );
    }
}
