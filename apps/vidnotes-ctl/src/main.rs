use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = vidnotes_ctl::Args::parse();

	vidnotes_ctl::run(args).await
}
