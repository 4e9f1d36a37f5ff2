use {
    anyhow::{Context, Result},
    houses_parser::HousesParser,
    structopt::StructOpt,
};

#[derive(Debug, StructOpt)]
struct Opt {
    /// Free-form description of the covered house numbers.
    #[structopt(default_value = "четные 2-28, нечетные 1-21")]
    range: String,

    /// House number (or identifier like 15а or 7/1) to look up.
    #[structopt(default_value = "18")]
    house: String,

    /// Be verbose (debug messages). You can also set the RUST_LOG env var for
    /// finer control.
    #[structopt(short = "v", long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    if opt.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let parser = HousesParser::new(&opt.range);
    let included = parser
        .is_house_included(&opt.house)
        .context("Failed to decode the range description")?;
    let result = if included { "входит" } else { "не входит" };
    println!("Дом {} {} в диапазон '{}'", opt.house, result, opt.range);

    Ok(())
}
