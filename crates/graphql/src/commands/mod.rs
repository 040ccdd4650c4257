mod ide_helper;

use crate::Cli;
use crate::CommandResult;
use ide_helper::IdeHelperCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    IdeHelper(Box<IdeHelperCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::IdeHelper(cmd) => cmd.run(cli).await
        }
    }
}
