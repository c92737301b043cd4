//! Shared test utilities: spy sinks and catalog fixtures.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use template_exporter::logging::Reporter;

pub type SpyBuffer = Arc<Mutex<Vec<u8>>>;

/// A `Write` that records everything into a shared buffer.
#[derive(Clone, Default)]
pub struct Spy(pub SpyBuffer);

impl Write for Spy {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Spy {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

/// Reporter whose three sinks are spies: (reporter, markup, status, errors).
pub fn spy_reporter() -> (Reporter, Spy, Spy, Spy) {
    let (markup, status, errors) = (Spy::default(), Spy::default(), Spy::default());
    let reporter = Reporter::new(
        Box::new(markup.clone()),
        Some(Box::new(status.clone())),
        Some(Box::new(errors.clone())),
    );
    (reporter, markup, status, errors)
}

pub const FRAMEWORK: &str = r#"
name = "Framework"
full_name = "Framework, Version=4.0.0.0"

[[types]]
name = "Button"
namespace = "Ui.Controls"
element = true
template = '<Style TargetType="Button" />'

[[types]]
name = "ComboBox"
namespace = "Ui.Controls"
element = true
template = '<Style TargetType="ComboBox" />'

[[types]]
name = "Thumb"
namespace = "Ui.Controls.Primitives"
element = true
template = '<Style TargetType="Thumb" />'

[[types]]
name = "Panel"
namespace = "Ui.Controls"
element = true

[[types]]
name = "BooleanConverter"
namespace = "Ui.Data"
"#;

pub const EXTRAS: &str = r#"{
  "name": "Extras",
  "full_name": "Extras, Version=1.2.0.0",
  "types": [
    { "name": "Dial", "namespace": "Extras.Ui", "element": true, "template": "<Style TargetType=\"Dial\" />" }
  ]
}"#;

/// Write the fixture manifests into `dir` and return their paths.
pub fn write_catalogs(dir: &Path) -> (PathBuf, PathBuf) {
    let framework = dir.join("framework.toml");
    let extras = dir.join("extras.json");
    std::fs::write(&framework, FRAMEWORK).expect("Failed to write framework manifest");
    std::fs::write(&extras, EXTRAS).expect("Failed to write extras manifest");
    (framework, extras)
}
