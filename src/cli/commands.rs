//! Command dispatch and per-command handlers

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, PreviewConfig, Settings};
use crate::domain::{ProductAreaNode, RenderOutcome, Row, CONTAINER_ID};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{HtmlDocument, InfraError};

/// Preview depth beyond which lines stop indenting further.
const MAX_PREVIEW_DEPTH: usize = 64;

/// Upper bound for `preview.indent` spaces per level.
const MAX_PREVIEW_INDENT: usize = 16;

/// One line of terminal preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub indent: usize,
    pub name: String,
    pub url: Option<String>,
    pub video: Option<String>,
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = match &cli.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?,
    };
    let settings = Settings::load(Some(&project_dir))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Commands::Render { file, output } => _render(&container, file, output.as_deref()),
        Commands::Rows { file } => _rows(&container, file),
        Commands::Extract { file, json } => _extract(&container, file, *json),
        Commands::Preview { file } => _preview(&container, file),
        Commands::Markup {
            file,
            with_container,
            output,
        } => _markup(&container, file, *with_container, output.as_deref()),
        Commands::Config { command } => _config(&container, command, &project_dir),
        Commands::Completion { shell } => {
            _completion(*shell);
            Ok(())
        }
    }
}

#[instrument(skip(container))]
fn _render(container: &ServiceContainer, file: &Path, out: Option<&Path>) -> CliResult<()> {
    let (page, outcome) = container.open_page(file)?;
    if outcome == RenderOutcome::ContainerMissing {
        output::warning(&format!(
            "no #{} in {}, page left unchanged",
            CONTAINER_ID,
            file.display()
        ));
    }
    emit(container, out, &page.document().to_html())
}

#[instrument(skip(container))]
fn _rows(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let (page, _) = container.open_page(file)?;
    for line in rendered_rows(page.document()) {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _extract(container: &ServiceContainer, file: &Path, json: bool) -> CliResult<()> {
    let document = load_document(container, file)?;
    let nodes = container.render_service().extract(&document)?;
    for line in extract_report(&nodes, json)? {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _preview(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let document = load_document(container, file)?;
    let nodes = container.render_service().extract(&document)?;

    output::header(&format!("#{} ({} areas)", CONTAINER_ID, nodes.len()));
    for line in preview_lines(&nodes, &container.settings.preview) {
        output::tree_line(
            line.indent,
            &line.name,
            line.url.as_deref(),
            line.video.as_deref(),
        );
    }
    Ok(())
}

#[instrument(skip(container))]
fn _markup(
    container: &ServiceContainer,
    file: &Path,
    with_container: bool,
    out: Option<&Path>,
) -> CliResult<()> {
    let json = container.read_input(file)?;
    let markup = container.markup_service().render_json(&json, with_container)?;
    emit(container, out, &markup)
}

#[instrument(skip(container))]
fn _config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    project_dir: &Path,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "(no config directory)"),
            }
            output::action("local", &local_config_path(project_dir).display());
        }
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Row HTML of the rendered tree container, one entry per row; empty when it was not rendered.
pub fn rendered_rows(document: &HtmlDocument) -> Vec<String> {
    document
        .mounted_rows(CONTAINER_ID)
        .map(|rows| rows.rows().iter().map(Row::to_html).collect())
        .unwrap_or_default()
}

/// `extract` output: pretty JSON array, or one tab-separated line per node.
pub fn extract_report(nodes: &[ProductAreaNode], json: bool) -> CliResult<Vec<String>> {
    if json {
        let s = serde_json::to_string_pretty(nodes).map_err(|e| CliError::Output(e.to_string()))?;
        return Ok(vec![s]);
    }
    Ok(nodes
        .iter()
        .map(|node| {
            format!(
                "{}\t{}\t{}\t{}",
                node.depth,
                node.name,
                node.url,
                node.video_link.as_deref().unwrap_or("")
            )
        })
        .collect())
}

pub fn preview_lines(nodes: &[ProductAreaNode], preview: &PreviewConfig) -> Vec<PreviewLine> {
    let per_level = preview.indent.min(MAX_PREVIEW_INDENT);
    nodes
        .iter()
        .map(|node| {
            let row = Row::from_node(node);
            let depth = usize::try_from(node.depth)
                .unwrap_or(usize::MAX)
                .min(MAX_PREVIEW_DEPTH);
            PreviewLine {
                indent: depth.saturating_mul(per_level),
                name: row.primary.text,
                url: preview.show_urls.then_some(row.primary.href),
                video: row.video.map(|v| v.href),
            }
        })
        .collect()
}

fn load_document(container: &ServiceContainer, file: &Path) -> CliResult<HtmlDocument> {
    let source = container.read_input(file)?;
    Ok(HtmlDocument::parse(source).map_err(InfraError::from)?)
}

/// Write `content` to `out`, or print it when writing to stdout.
fn emit(container: &ServiceContainer, out: Option<&Path>, content: &str) -> CliResult<()> {
    match container.write_output(out, content)? {
        Some(stdout) => output::info(stdout.trim_end_matches('\n')),
        None => {
            if let Some(path) = out {
                output::action("Wrote", &path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nodes() -> Vec<ProductAreaNode> {
        vec![
            ProductAreaNode::new(0, "Platform", "/areas/1"),
            ProductAreaNode::new(2, "Login", "/areas/4").with_video("https://video.example/login"),
        ]
    }

    #[test]
    fn given_nodes_when_extracting_as_json_then_array_of_node_objects() {
        let lines = extract_report(&nodes(), true).unwrap();

        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"depth": 0, "name": "Platform", "url": "/areas/1"},
                {"depth": 2, "name": "Login", "url": "/areas/4",
                 "video_link": "https://video.example/login"}
            ])
        );
    }

    #[test]
    fn given_nodes_when_extracting_as_text_then_tab_separated_lines() {
        let lines = extract_report(&nodes(), false).unwrap();

        assert_eq!(
            lines,
            [
                "0\tPlatform\t/areas/1\t",
                "2\tLogin\t/areas/4\thttps://video.example/login"
            ]
        );
    }

    #[rstest]
    #[case(2, true, [0, 4])]
    #[case(3, false, [0, 6])]
    fn given_preview_settings_when_previewing_then_indent_and_urls_follow(
        #[case] indent: usize,
        #[case] show_urls: bool,
        #[case] expected: [usize; 2],
    ) {
        let preview = PreviewConfig { indent, show_urls };

        let lines = preview_lines(&nodes(), &preview);

        let indents: Vec<_> = lines.iter().map(|l| l.indent).collect();
        assert_eq!(indents, expected);
        assert_eq!(lines[0].url.is_some(), show_urls);
        assert_eq!(lines[0].video, None);
        assert_eq!(lines[1].video.as_deref(), Some("https://video.example/login"));
    }

    #[test]
    fn given_huge_indent_and_depth_when_previewing_then_bounded() {
        let preview = PreviewConfig {
            indent: usize::MAX,
            show_urls: true,
        };
        let deep = [ProductAreaNode::new(u32::MAX, "Deep", "/deep")];

        let lines = preview_lines(&deep, &preview);

        assert_eq!(lines[0].indent, MAX_PREVIEW_DEPTH * MAX_PREVIEW_INDENT);
    }

    #[test]
    fn given_page_without_container_when_listing_rows_then_nothing() {
        let doc = HtmlDocument::parse("<html><body><p>no tree</p></body></html>").unwrap();

        assert!(rendered_rows(&doc).is_empty());
    }
}
