use argh::FromArgs;
use log::error;

mod convert;
mod std_fs;

#[derive(FromArgs)]
/// Convert an image into a C header of RGB565 pixel data stored in PROGMEM.
/// Pixels with alpha below 128 become 0x0000.
struct Args {
    /// input image path
    #[argh(positional)]
    input: String,

    /// name of the generated array, also used for its _W and _H constants
    #[argh(option)]
    name: String,

    /// output header path
    #[argh(option)]
    out: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match convert::convert(&args.input, &args.name, &args.out) {
        Ok(summary) => println!("{}", summary.status_line(&args.input, &args.out)),
        Err(err) => {
            error!("Conversion of {} failed", args.input);
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
