// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Json,
    Csv,
    Both,
}

impl ExportFormat {
    /// Extensions written for this format, in write order.
    pub fn exts(&self) -> &'static [&'static str] {
        match self {
            ExportFormat::Json => &["json"],
            ExportFormat::Csv => &["csv"],
            ExportFormat::Both => &["json", "csv"],
        }
    }
    pub fn wants_json(&self) -> bool { matches!(self, ExportFormat::Json | ExportFormat::Both) }
    pub fn wants_csv(&self) -> bool { matches!(self, ExportFormat::Csv | ExportFormat::Both) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Both,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// `<dir>/<stem>.<ext>`
    pub fn path_for(&self, ext: &str) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(&*stem, ".", ext))
    }

    /// All files this export will produce.
    pub fn out_paths(&self) -> Vec<PathBuf> {
        self.format.exts().iter().map(|ext| self.path_for(ext)).collect()
    }

    /// Accepts a directory, or a file path whose stem is kept.
    /// Any extension is ignored; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() { return; }

        let p = Path::new(s);
        let dir_hint = s.ends_with('/') || s.ends_with('\\') || p.is_dir();
        if dir_hint || p.extension().is_none() {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_format() {
        let mut opts = ExportOptions::default();
        let paths = opts.out_paths();
        assert_eq!(paths, vec![
            PathBuf::from("out").join("resources.json"),
            PathBuf::from("out").join("resources.csv"),
        ]);

        opts.format = ExportFormat::Csv;
        assert_eq!(opts.out_paths(), vec![PathBuf::from("out").join("resources.csv")]);
    }

    #[test]
    fn set_path_keeps_stem_and_drops_extension() {
        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Json;
        opts.set_path("reports/catalog.txt");
        assert_eq!(opts.out_paths(), vec![PathBuf::from("reports").join("catalog.json")]);
    }

    #[test]
    fn set_path_without_extension_is_a_directory() {
        let mut opts = ExportOptions::default();
        opts.set_path("reports/2026");
        assert_eq!(opts.out_dir(), Path::new("reports/2026"));
        assert!(opts.path_for("csv").ends_with("resources.csv"));
    }
}
