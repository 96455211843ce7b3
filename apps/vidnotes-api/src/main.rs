use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = vidnotes_api::Args::parse();

	vidnotes_api::run(args).await
}
