use std::env;
use std::fs::File;

use nacpkit::Result;
use nacpkit::formats::nacp::ControlData;

fn main() -> Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "control.nacp".into());
    let nacp = ControlData::parse(&mut File::open(&path)?)?;

    println!("format: {:?}", nacp.format());
    if let Some(e) = nacp.degradation() {
        println!("title block unreadable: {e}");
    }
    for title in nacp.titles() {
        println!("{title}");
    }

    Ok(())
}
