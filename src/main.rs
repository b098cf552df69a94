use std::io::stdout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut out = stdout().lock();
    typeshow::run(&mut out)?;
    Ok(())
}
