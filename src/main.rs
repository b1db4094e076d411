use clap::error::ErrorKind;

use check_cmk_services::cli::{build_cli, CheckArgs};
use check_cmk_services::{commands, init_logging, Status};

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                Status::Unknown.exit()
            }
        },
    };

    let args = CheckArgs::from_matches(&matches);
    init_logging(args.debug);

    let rendered = commands::check(&args);
    println!("{}", rendered.text());
    rendered.status.exit();
}
