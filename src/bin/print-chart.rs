use anyhow::{bail, Context, Result};
use saju::domain::fortune::compose_basic_fortune;
use saju::domain::saju::build_chart;
use serde_json::json;

/// 운영용 보조 도구: 서버 없이 사주와 로컬 해석을 JSON으로 출력한다.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 5 {
        bail!("usage: print-chart <year> <month> <day> <hour> <name> [gender]");
    }

    let year: i32 = args[0].parse().context("year must be a number")?;
    let month: i32 = args[1].parse().context("month must be a number")?;
    let day: i32 = args[2].parse().context("day must be a number")?;
    let hour: i32 = args[3].parse().context("hour must be a number")?;
    let name = &args[4];
    let gender = args.get(5).map(String::as_str).unwrap_or("male");

    let chart = build_chart(year, month, day, hour);
    let fortune = compose_basic_fortune(&chart, name, gender);

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "sajuData": chart,
            "fortune": fortune,
        }))?
    );

    Ok(())
}
