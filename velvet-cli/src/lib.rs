use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use velvet_core::{Component, Data, Listeners, Options, Template};

/// `RUST_LOG` when set, `velvet=info` otherwise.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("velvet=info"))
}

/// Load a `.vx` file as a component named after its file stem.
pub fn load_vx(path: &Path) -> Result<Component> {
    let src =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("component");
    velvet_sfc::load_component(name, &src)
        .with_context(|| format!("failed to load component {}", path.display()))
}

/// Render `input` with the given child components and optional JSON data file.
///
/// The data file is merged over the root component's own data; children are
/// available to the root template under their file stems.
pub fn render_file(
    input: &Path,
    data_file: Option<&Path>,
    components: &[PathBuf],
    options: Options,
) -> Result<(String, Listeners)> {
    let mut root = load_vx(input)?;
    for path in components {
        root = root.with_child(load_vx(path)?);
    }

    let mut data = root.instance_data();
    if let Some(path) = data_file {
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let extra = Data::from_json(&src)
            .with_context(|| format!("invalid data file {}", path.display()))?;
        data.merge(extra);
    }

    let mut listeners = Listeners::new();
    let html = Template::new(&root)
        .with_options(options)
        .execute(&mut data, &mut listeners)
        .with_context(|| format!("failed to render {}", input.display()))?;
    Ok((html, listeners))
}

/// `velvet render`: write the markup to `out` (or stdout) and report listeners.
pub fn render_cmd(
    input: &Path,
    data_file: Option<&Path>,
    components: &[PathBuf],
    options: Options,
    out: Option<&Path>,
) -> Result<()> {
    let (html, listeners) = render_file(input, data_file, components, options)?;
    for (event, handler) in listeners.iter() {
        info!(event, ?handler, "listener registered");
    }

    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}
