use std::path::{Path, PathBuf};

use anyhow::Context as _;
use modelgen_codegen_lib::{
    model_type, schema_type, Artifact, DeclaredType, FieldDescriptor, GeneratedCode, Session,
};
use tracing::{debug, warn};

use crate::config::{CliConfig, OutputConfig};

/// Submit the field list through a session, as the form does.
pub fn generate(fields: Vec<FieldDescriptor>, config: &CliConfig) -> GeneratedCode {
    if fields.iter().all(|f| !f.is_named()) {
        warn!("field list has no named fields, output bodies will be empty");
    }
    let mut session = Session::from_fields(fields, config.template_names());
    let code = session.submit();
    debug!(show_code = session.show_code(), "session submitted");
    code
}

/// Stdout rendering: each artifact under a `// <artifact>` banner.
pub fn render(code: &GeneratedCode, selected: &[Artifact]) -> String {
    let mut output = String::new();
    for (i, artifact) in selected.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("// {}\n", artifact.as_str()));
        output.push_str(code.get(*artifact));
        output.push('\n');
    }
    output
}

pub fn write_files(
    code: &GeneratedCode,
    selected: &[Artifact],
    dir: &Path,
    output: &OutputConfig,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(selected.len());
    for artifact in selected {
        let path = dir.join(output.file_name(*artifact));
        let mut content = code.get(*artifact).to_string();
        content.push('\n');
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), artifact = artifact.as_str(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

/// One row per supported type: declared, schema token, model type.
pub fn type_table() -> String {
    let mut output = format!("{:<12} {:<26} {}\n", "TYPE", "SCHEMA", "MODEL");
    for ty in DeclaredType::ALL {
        output.push_str(&format!(
            "{:<12} {:<26} {}\n",
            ty.as_str(),
            schema_type(&ty),
            model_type(&ty)
        ));
    }
    output
}
