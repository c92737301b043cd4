//! Command-line surface: switch names, help text, export request.

mod request;

pub use request::ExportRequest;

use crate::args::{ArgName, ArgSet, KindMask};
use crate::names;

pub fn help() -> [ArgName; 2] {
    names!['h', "help"]
}

pub fn quiet() -> [ArgName; 2] {
    names!['q', "quiet"]
}

pub fn include_messages() -> [ArgName; 1] {
    names!["include-messages"]
}

pub fn output() -> [ArgName; 3] {
    names!['o', "out", "output"]
}

pub fn open() -> [ArgName; 2] {
    names!['O', "open"]
}

pub fn ignore_case() -> [ArgName; 2] {
    names!['i', "ignore-case"]
}

pub fn namespace() -> [ArgName; 2] {
    names!['N', "namespace"]
}

pub fn assembly() -> [ArgName; 2] {
    names!['A', "assembly"]
}

pub fn load_assembly() -> [ArgName; 2] {
    names!['L', "load-assembly"]
}

/// Switches that take the following token as their value.
pub fn implicit_capture() -> Vec<ArgName> {
    [
        &output()[..],
        &namespace()[..],
        &assembly()[..],
        &load_assembly()[..],
    ]
    .concat()
}

/// Parse the process arguments (without the program name).
pub fn parse_env() -> ArgSet {
    ArgSet::parse(std::env::args().skip(1), &implicit_capture())
}

/// No arguments at all, or `-h`/`--help` anywhere.
pub fn wants_help(args: &ArgSet) -> bool {
    args.is_empty() || args.contains_any(KindMask::SWITCH, &help())
}

/// Name of the running executable, without extension.
pub fn program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

pub fn help_text(program: &str) -> String {
    format!(
        "\
{name} v{version}
  Exports the default templates for the specified control type(s).
  If an output file isn't specified, outputs to STDOUT. Status messages are disabled for STDOUT by default.
  A regular expression can be specified in place of a typename by prepending it with \"regex:\".

USAGE:
  {program} <OPTIONS> [[regex:]TYPENAME...]

OPTIONS:
  -h, --help                              Shows this help doc.
  -q, --quiet                             Prevents messages from being written to the console. This is
                                           implicitly specified if outputting to STDOUT instead of a file.
      --include-messages                  Forces messages to be shown when outputting to STDOUT.
  -o, --output <PATH>                     Specifies an output filepath. You can specify multiple arguments.
  -O, --open                              Opens the output file(s) in the default program for the file type.
  -i, --ignore-case                       Use case-insensitive string comparisons when searching for names.
  -N, --namespace <[regex:]NAMESPACE[+]>  Exports all templates in the specified namespace. Appending a '+' to
                                           the namespace will include types in sub-namespaces, too.
  -A, --assembly <[regex:]NAME>           Exports all templates in the specified catalog module.
  -L, --load-assembly <PATH>              Loads a catalog manifest (.toml/.json) or every manifest in a
                                           directory. Can be specified multiple times.
",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}
