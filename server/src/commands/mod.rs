use clap::Subcommand;

use crate::Result;

pub(crate) mod info;

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Run the web server
    #[default]
    Serve,
    /// Print the contact directory shown on the page
    Info,
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Info => {
                info::print_info();
                Ok(())
            }
        }
    }
}
