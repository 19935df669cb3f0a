use clap::Parser;

mod commands;
mod output;

use commands::disable;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "cpp-disable")]
#[command(version = VERSION)]
#[command(
    about = "Parse a build/linker error log and disable duplicate varoa EI/TFLM .cpp files by renaming them to .cpp.disabled"
)]
struct Cli {
    #[command(flatten)]
    args: disable::DisableArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = output::print_text_result(disable::run(cli.args));

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
