use figment::providers::{Data, Format, Json, Toml, Yaml};
use figment::value::{Dict, Map};
use figment::{Error, Metadata, Profile, Provider};
use std::path::Path;

/// File formats understood by the config and lexicon loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from a file extension, if it is a known one
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Smart file loader that chooses the right format based on file extension
///
/// Unknown extensions are sniffed from the file content and fall back to TOML.
/// Missing files yield an empty provider, so optional layers can be merged blindly.
pub fn auto<P: AsRef<Path>>(path: P) -> impl Provider {
    let path = path.as_ref();

    let format = FileFormat::from_extension(path).unwrap_or_else(|| {
        match std::fs::read_to_string(path) {
            Ok(content) => match detect_format_from_content(&content) {
                Some(format) => {
                    tracing::debug!(
                        "Detected format '{}' for {}",
                        format.as_str(),
                        path.display()
                    );
                    format
                }
                None => {
                    tracing::debug!(
                        "Could not detect format for {}, defaulting to TOML",
                        path.display()
                    );
                    FileFormat::Toml
                }
            },
            Err(_) => FileFormat::Toml,
        }
    });

    match format {
        FileFormat::Toml => SmartProvider::Toml(Toml::file(path)),
        FileFormat::Json => SmartProvider::Json(Json::file(path)),
        FileFormat::Yaml => SmartProvider::Yaml(Yaml::file(path)),
    }
}

/// Wrapper enum to handle different provider types
enum SmartProvider {
    Toml(Data<Toml>),
    Json(Data<Json>),
    Yaml(Data<Yaml>),
}

impl Provider for SmartProvider {
    fn metadata(&self) -> Metadata {
        match self {
            SmartProvider::Toml(p) => p.metadata(),
            SmartProvider::Json(p) => p.metadata(),
            SmartProvider::Yaml(p) => p.metadata(),
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        match self {
            SmartProvider::Toml(p) => p.data(),
            SmartProvider::Json(p) => p.data(),
            SmartProvider::Yaml(p) => p.data(),
        }
    }
}

/// Attempt to detect the format from file content
pub fn detect_format_from_content(content: &str) -> Option<FileFormat> {
    let trimmed = content.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(FileFormat::Json);
    }

    // TOML: [section] headers or key = value
    if trimmed.lines().any(|line| {
        let line = line.trim();
        (line.starts_with('[') && line.ends_with(']') && !line.contains(','))
            || (line.contains('=') && !line.contains(':'))
    }) {
        return Some(FileFormat::Toml);
    }

    // YAML: document separator, key: value, or list items
    if trimmed.starts_with("---")
        || trimmed.lines().any(|line| {
            let line = line.trim();
            line.starts_with("- ") || (line.contains(':') && !line.starts_with('['))
        })
    {
        return Some(FileFormat::Yaml);
    }

    None
}
