//! Plain-text per-class dump for inspecting parsed metadata.
//!
//! Every class becomes `<out>/<module>/<Class>.txt`:
//!
//! ```text
//! funcs
//!
//! void setParent(QWidget * parent) [plain]
//!
//!
//! enums
//!
//! QWidget::RenderFlag { DrawWindowBackground = 0x1 }
//! ```

use std::{fmt::Write, path::Path};

use eyre::Result;
use qtbind_core::{File, WriteResult};
use qtbind_ir::{Catalog, ClassRecord};

/// Dump text for one class.
pub fn dump_class(class: &ClassRecord) -> String {
    let mut out = String::from("funcs\n\n");
    for function in &class.functions {
        let _ = writeln!(out, "{}", function);
    }

    out.push_str("\n\nenums\n\n");
    for record in &class.enums {
        let _ = writeln!(out, "{}", record);
    }
    out
}

/// Dump files for every class in the catalog, in catalog order.
pub fn dump_files(catalog: &Catalog, out: &Path) -> Vec<File> {
    catalog
        .iter()
        .map(|class| {
            let path = out
                .join(&class.module)
                .join(format!("{}.txt", class.name));
            File::new(path, dump_class(class))
        })
        .collect()
}

/// Counts of a dump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub written: usize,
    pub unchanged: usize,
}

/// Write the dump of `catalog` below `out`.
pub fn write_dump(catalog: &Catalog, out: &Path) -> Result<DumpSummary> {
    let mut summary = DumpSummary::default();
    for file in dump_files(catalog, out) {
        match file.write()? {
            WriteResult::Written => {
                tracing::trace!(path = %file.path().display(), "dumped class");
                summary.written += 1;
            }
            WriteResult::Unchanged => summary.unchanged += 1,
        }
    }
    Ok(summary)
}
