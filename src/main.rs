use clap::Parser;
use log::{error, info};
use quiz_app_rust::{
    config::Args,
    error::Result,
    handlers::{session_handler::SessionHost, terminal_handler::handle_terminal},
    loggers::file_logger::init_file_logger,
    models::game::{default_pack, load_pack},
};
use tokio::io::{stdin, stdout, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_file_logger(&args.log_dir, args.log_level)?;
    info!("App started!");

    let pack = match &args.pack {
        Some(path) => load_pack(path).inspect_err(|err| error!("Pack rejected: {}", err))?,
        None => default_pack(),
    };

    let mut host = SessionHost::new();
    host.start(pack)?;

    let mut output = stdout();
    handle_terminal(&mut host, BufReader::new(stdin()), &mut output, args.format).await?;

    info!("App finished");
    Ok(())
}
