use helmtpl::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();

    match run(args) {
        Ok(output) => println!("{}", output.display()),
        Err(err) => default_error_handler(err),
    }
}
