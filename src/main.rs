use std::process;

use anyhow::Result;
use log::LevelFilter;
use send_mail_action::{dispatch, input, workflow, Smtp, SmtpConfig};

fn run() -> Result<()> {
    let to = input::get_input("to");
    let subject = input::get_input("subject");
    let body = input::get_input("body");

    let config = SmtpConfig::from_env();
    let mut sender = Smtp::new(&config);
    dispatch(&mut sender, &config, to, subject, body)?;

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        workflow::error(&format!("{err:#}"));
        process::exit(1);
    }
}
