use crate::class_source::DirectoryClassSource;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_directives::directives::SchemaDocument;
use libgraphql_directives::generate_directive_schema;
use std::path::PathBuf;

/// A `NAME=DIR` pair mapping a directive namespace onto a directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NamespaceDir {
    pub(crate) dir: PathBuf,
    pub(crate) name: String,
}

fn parse_namespace_dir(arg: &str) -> Result<NamespaceDir, String> {
    let Some((name, dir)) = arg.split_once('=') else {
        return Err(format!("expected `NAME=DIR`, got `{arg}`"));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing namespace name in `{arg}`"));
    }
    if dir.is_empty() {
        return Err(format!("missing directory in `{arg}`"));
    }

    Ok(NamespaceDir {
        dir: PathBuf::from(dir),
        name: name.to_string(),
    })
}

/// Generate a schema file holding the definitions of every schema directive
/// found in the configured namespaces, for use by GraphQL-aware editors.
#[derive(Debug, clap::Args)]
pub(crate) struct IdeHelperCmd {
    #[arg(
        default_value="app::directives=directives",
        help="A directive namespace and the directory its directives live \
             in, as `NAME=DIR`. May be repeated; earlier namespaces take \
             priority when two directives share a name.",
        long="namespace",
        value_name="NAME=DIR",
        value_parser=parse_namespace_dir,
    )]
    namespaces: Vec<NamespaceDir>,

    #[arg(
        default_value="schema-directives.graphql",
        help="Path of the generated schema directives file.",
        long,
    )]
    output: PathBuf,
}
impl IdeHelperCmd {
    fn write_schema_document(&self) -> anyhow::Result<SchemaDocument> {
        let source = DirectoryClassSource::new(
            self.namespaces.iter()
                .map(|namespace| (namespace.name.to_string(), namespace.dir.to_owned())),
        );

        log::debug!(
            "Scanning {} directive namespaces...",
            self.namespaces.len(),
        );
        let namespaces = source.namespaces();
        let document = generate_directive_schema(namespaces.as_slice(), &source, &source)
            .context("Failed to generate schema directive definitions")?;
        log::debug!(
            "Generated definitions for {} directives.",
            document.directive_count(),
        );

        std::fs::write(&self.output, document.as_str())
            .with_context(|| format!("Failed to write {:#?}", self.output))?;

        Ok(document)
    }
}

#[inherent::inherent]
impl RunnableCommand for IdeHelperCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.write_schema_document() {
            Ok(_) => CommandResult::stdout(format_args!(
                "{} Wrote schema directive definitions to {}.",
                output_utils::GREEN_CHECK,
                self.output.display(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
