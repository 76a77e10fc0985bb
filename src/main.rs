use anyhow::Result;

fn main() -> Result<()> {
    let args = edmv::cli::parse();
    edmv::app::run(args)
}
