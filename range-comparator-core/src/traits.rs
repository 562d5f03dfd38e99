//! Module containing the serialization trait shared by vehicles, fleets, and
//! comparison results.

use crate::imports::*;

/// Normalizes a file extension or format name, e.g. `".YML"` -> `"yml"`
fn normalize_format(format: &str) -> String {
    format.trim_start_matches('.').to_lowercase()
}

fn extension_of(filepath: &Path) -> anyhow::Result<&str> {
    filepath
        .extension()
        .and_then(OsStr::to_str)
        .with_context(|| format!("File extension could not be parsed: {filepath:?}"))
}

pub trait SerdeAPI: Serialize + for<'a> Deserialize<'a> {
    const ACCEPTED_FORMATS: &'static [&'static str] = &["yaml", "yml", "json"];

    /// Specialized code to execute upon initialization
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Write (serialize) an object to a file, choosing the format from the
    /// file extension. Truncates the file if it already exists.
    fn to_file<P: AsRef<Path>>(&self, filepath: P) -> anyhow::Result<()> {
        let filepath = filepath.as_ref();
        let extension = extension_of(filepath)?;
        let file = File::create(filepath)
            .with_context(|| format!("Could not create file: {filepath:?}"))?;
        self.to_writer(file, extension)
    }

    fn to_writer<W: std::io::Write>(&self, wtr: W, format: &str) -> anyhow::Result<()> {
        match normalize_format(format).as_str() {
            "yaml" | "yml" => serde_yaml::to_writer(wtr, self)?,
            "json" => serde_json::to_writer(wtr, self)?,
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_FORMATS
            ),
        }
        Ok(())
    }

    /// Read (deserialize) an object from a file, choosing the format from
    /// the file extension.
    ///
    /// # Arguments:
    ///
    /// * `filepath`: The filepath from which to read the object
    ///
    fn from_file<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let extension = extension_of(filepath)?;
        let file = File::open(filepath).with_context(|| {
            if !filepath.exists() {
                format!("File not found: {filepath:?}")
            } else {
                format!("Could not open file: {filepath:?}")
            }
        })?;
        Self::from_reader(file, extension)
            .with_context(|| format!("Could not parse file: {filepath:?}"))
    }

    /// Deserialize an object from anything that implements [`std::io::Read`]
    fn from_reader<R: std::io::Read>(rdr: R, format: &str) -> anyhow::Result<Self> {
        let mut deserialized: Self = match normalize_format(format).as_str() {
            "yaml" | "yml" => serde_yaml::from_reader(rdr)?,
            "json" => serde_json::from_reader(rdr)?,
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_FORMATS
            ),
        };
        deserialized.init()?;
        Ok(deserialized)
    }

    /// Write (serialize) an object into a string of the given `format`
    fn to_str(&self, format: &str) -> anyhow::Result<String> {
        match normalize_format(format).as_str() {
            "yaml" | "yml" => self.to_yaml(),
            "json" => self.to_json(),
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_FORMATS
            ),
        }
    }

    /// Read (deserialize) an object from a string of the given `format`
    fn from_str<S: AsRef<str>>(contents: S, format: &str) -> anyhow::Result<Self> {
        match normalize_format(format).as_str() {
            "yaml" | "yml" => Self::from_yaml(contents),
            "json" => Self::from_json(contents),
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_FORMATS
            ),
        }
    }

    fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self)?)
    }

    fn from_json<S: AsRef<str>>(json_str: S) -> anyhow::Result<Self> {
        let mut json_de: Self = serde_json::from_str(json_str.as_ref())?;
        json_de.init()?;
        Ok(json_de)
    }

    fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(&self)?)
    }

    fn from_yaml<S: AsRef<str>>(yaml_str: S) -> anyhow::Result<Self> {
        let mut yaml_de: Self = serde_yaml::from_str(yaml_str.as_ref())?;
        yaml_de.init()?;
        Ok(yaml_de)
    }
}
