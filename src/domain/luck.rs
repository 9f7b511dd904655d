use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::saju::ZODIAC_ANIMALS;

pub const LUCKY_COLORS: [&str; 10] =
    ["빨강", "파랑", "노랑", "초록", "보라", "주황", "분홍", "흰색", "검정", "금색"];

pub const DAILY_MESSAGES: [&str; 8] = [
    "오늘은 새로운 기회가 찾아올 날입니다.",
    "작은 친절이 큰 행운을 가져다 줄 것입니다.",
    "오늘 만나는 사람들과의 대화가 도움이 될 것입니다.",
    "계획했던 일을 실행에 옮기기 좋은 날입니다.",
    "주변 사람들의 조언에 귀를 기울여보세요.",
    "오늘은 휴식과 재충전이 필요한 날입니다.",
    "새로운 도전을 시작하기 좋은 시기입니다.",
    "가족이나 친구와 좋은 시간을 보낼 수 있을 것입니다.",
];

const WEEK_DAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

// (점수 70 이상, 미만) 메시지 쌍. ZODIAC_ANIMALS와 같은 순서.
const ZODIAC_MESSAGES: [(&str, &str); 12] = [
    ("오늘은 기회가 많이 찾아올 것입니다.", "신중한 판단이 필요한 날입니다."),
    ("꾸준한 노력이 결실을 맺을 날입니다.", "참을성을 가지고 기다리는 것이 좋습니다."),
    ("리더십을 발휘할 기회가 올 것입니다.", "성급한 결정은 피하는 것이 좋습니다."),
    ("평화롭고 행복한 하루가 될 것입니다.", "조용히 자신만의 시간을 가져보세요."),
    ("큰 성과를 거둘 수 있는 날입니다.", "겸손한 자세를 유지하는 것이 좋습니다."),
    ("직감이 뛰어난 날입니다. 믿고 행동하세요.", "신중하게 생각한 후 행동하세요."),
    ("활발한 활동이 좋은 결과를 가져올 것입니다.", "무리한 일정은 피하는 것이 좋습니다."),
    ("주변 사람들과의 화합이 중요한 날입니다.", "혼자만의 시간이 필요할 수 있습니다."),
    ("창의적인 아이디어가 빛을 발할 것입니다.", "계획을 차근차근 세워보세요."),
    ("세심한 준비가 성공으로 이어질 것입니다.", "완벽을 추구하기보다 적당히 타협하세요."),
    ("진실된 마음이 통하는 날입니다.", "신뢰할 만한 사람들과 시간을 보내세요."),
    ("관대한 마음이 복을 부를 것입니다.", "절약하는 마음가짐이 필요한 날입니다."),
];

/// KST(+09:00) 기준 오늘 날짜.
pub fn today_kst() -> NaiveDate {
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    Utc::now().with_timezone(&kst).date_naive()
}

pub fn name_hash(name: &str) -> i64 {
    name.chars().map(|c| c as i64).sum()
}

/// 시드 = 일년 중 몇 번째 날 + 이름 문자코드 합 + 출생년도(없으면 1990).
pub fn derive_seed(name: &str, birth_year: Option<i32>, date: NaiveDate) -> i64 {
    i64::from(date.ordinal()) + name_hash(name) + i64::from(birth_year.unwrap_or(1990))
}

/// 시드 기반 랜덤 생성 (같은 날 같은 결과). 상수 9301/49297/233280은
/// 재현성 계약의 일부이므로 절대 바꾸지 않는다.
pub fn draw(seed: i64) -> f64 {
    seed.wrapping_mul(9301).wrapping_add(49297).rem_euclid(233280) as f64 / 233280.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckScores {
    pub overall: u32,
    pub love: u32,
    pub money: u32,
    pub health: u32,
    pub work: u32,
}

/// 다섯 점수 모두 같은 fraction에서 유도된다. 독립적이지 않은 것이
/// 의도된 설계다 (하루의 운세 전체가 시드 하나로 재현된다).
pub fn scores(fraction: f64) -> LuckScores {
    LuckScores {
        overall: (fraction * 100.0).floor() as u32 + 1,
        love: category_score(fraction, 123.0),
        money: category_score(fraction, 456.0),
        health: category_score(fraction, 789.0),
        work: category_score(fraction, 321.0),
    }
}

fn category_score(fraction: f64, multiplier: f64) -> u32 {
    ((fraction * multiplier) % 100.0).floor() as u32 + 1
}

pub fn lucky_color(fraction: f64) -> &'static str {
    LUCKY_COLORS[(fraction * LUCKY_COLORS.len() as f64).floor() as usize]
}

pub fn lucky_numbers(fraction: f64) -> [u32; 3] {
    let mut numbers = [0u32; 3];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = ((fraction * (i + 1) as f64 * 789.0) % 100.0).floor() as u32 + 1;
    }
    numbers
}

pub fn today_message(fraction: f64) -> &'static str {
    DAILY_MESSAGES[(fraction * DAILY_MESSAGES.len() as f64).floor() as usize]
}

pub fn luck_advice(overall: u32) -> &'static str {
    if overall >= 80 {
        "오늘은 모든 일이 순조롭게 풀릴 것입니다. 적극적으로 행동하세요!"
    } else if overall >= 60 {
        "전반적으로 좋은 하루가 될 것입니다. 긍정적인 마음가짐을 유지하세요."
    } else if overall >= 40 {
        "평범한 하루가 될 것 같습니다. 작은 것에 감사하는 마음을 가져보세요."
    } else {
        "오늘은 조금 조심스럽게 행동하는 것이 좋겠습니다. 무리하지 마세요."
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLuck {
    pub date: String,
    pub name: String,
    pub gender: String,
    pub luck_scores: LuckScores,
    pub lucky_color: &'static str,
    pub lucky_numbers: [u32; 3],
    pub today_message: &'static str,
    pub detailed_fortune: String,
}

pub fn daily_luck(name: &str, gender: &str, birth_year: Option<i32>, date: NaiveDate) -> DailyLuck {
    let fraction = draw(derive_seed(name, birth_year, date));
    let luck_scores = scores(fraction);
    let lucky_color = lucky_color(fraction);
    let lucky_numbers = lucky_numbers(fraction);
    let today_message = today_message(fraction);

    let detailed_fortune = format!(
        "\n🌟 {name}님의 {month}월 {day}일 운세 🌟\n\n\
         📊 오늘의 운세 점수\n\
         • 종합운: {overall}점\n\
         • 연애운: {love}점\n\
         • 재물운: {money}점\n\
         • 건강운: {health}점\n\
         • 직장운: {work}점\n\n\
         🎨 오늘의 행운 컬러: {lucky_color}\n\
         🔢 행운의 숫자: {numbers}\n\n\
         💫 오늘의 메시지\n{today_message}\n\n\
         ✨ 오늘의 조언\n{advice}\n",
        name = name,
        month = date.month(),
        day = date.day(),
        overall = luck_scores.overall,
        love = luck_scores.love,
        money = luck_scores.money,
        health = luck_scores.health,
        work = luck_scores.work,
        lucky_color = lucky_color,
        numbers = lucky_numbers.map(|n| n.to_string()).join(", "),
        today_message = today_message,
        advice = luck_advice(luck_scores.overall),
    );

    DailyLuck {
        date: date.format("%Y-%m-%d").to_string(),
        name: name.to_owned(),
        gender: gender.to_owned(),
        luck_scores,
        lucky_color,
        lucky_numbers,
        today_message,
        detailed_fortune,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyDayLuck {
    pub day: &'static str,
    pub date: u32,
    pub overall: u32,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyLuck {
    pub week_start: String,
    pub name: String,
    pub weekly_fortunes: Vec<WeeklyDayLuck>,
    pub weekly_advice: &'static str,
}

/// 기준일이 속한 주(일요일 시작)의 7일을 각각 독립된 시드로 뽑는다.
pub fn weekly_luck(name: &str, birth_year: Option<i32>, date: NaiveDate) -> WeeklyLuck {
    let week_start = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));

    let mut weekly_fortunes = Vec::with_capacity(7);
    for offset in 0..7i64 {
        let day_date = week_start + Duration::days(offset);
        let fraction = draw(derive_seed(name, birth_year, day_date));
        weekly_fortunes.push(WeeklyDayLuck {
            day: WEEK_DAYS[offset as usize],
            date: day_date.day(),
            overall: (fraction * 100.0).floor() as u32 + 1,
            message: today_message(fraction),
        });
    }

    let average =
        weekly_fortunes.iter().map(|d| f64::from(d.overall)).sum::<f64>() / 7.0;

    WeeklyLuck {
        week_start: week_start.format("%Y-%m-%d").to_string(),
        name: name.to_owned(),
        weekly_fortunes,
        weekly_advice: weekly_advice(average),
    }
}

pub fn weekly_advice(average: f64) -> &'static str {
    if average >= 70.0 {
        "이번 주는 전반적으로 좋은 운세입니다. 새로운 도전을 시작해보세요!"
    } else if average >= 50.0 {
        "이번 주는 안정적인 운세입니다. 꾸준히 노력하면 좋은 결과가 있을 것입니다."
    } else {
        "이번 주는 신중하게 행동하는 것이 좋겠습니다. 휴식과 재충전의 시간으로 활용하세요."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacDailyLuck {
    pub zodiac: &'static str,
    pub score: u32,
    pub rank: u32,
    pub message: &'static str,
}

/// 띠별 오늘의 운세. 점수 내림차순으로 1~12위를 매기고, 동점이면
/// 띠 배열에서 앞선 동물이 높은 순위를 가진다 (안정 정렬).
pub fn zodiac_daily(date: NaiveDate) -> Vec<ZodiacDailyLuck> {
    let day_of_year = i64::from(date.ordinal());

    let mut entries: Vec<ZodiacDailyLuck> = ZODIAC_ANIMALS
        .iter()
        .enumerate()
        .map(|(idx, animal)| {
            let fraction = draw(day_of_year + idx as i64 * 123);
            let score = (fraction * 100.0).floor() as u32 + 1;
            ZodiacDailyLuck {
                zodiac: *animal,
                score,
                rank: 0,
                message: zodiac_message(idx, score),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }
    entries
}

fn zodiac_message(animal_idx: usize, score: u32) -> &'static str {
    let (good, caution) = ZODIAC_MESSAGES[animal_idx % ZODIAC_MESSAGES.len()];
    if score >= 70 {
        good
    } else {
        caution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_vector() {
        // '철'(52384) + '수'(49688) = 102072, 2024-06-15은 167번째 날
        let seed = derive_seed("철수", Some(1990), date(2024, 6, 15));
        assert_eq!(seed, 167 + 102072 + 1990);
        assert_eq!(seed, derive_seed("철수", Some(1990), date(2024, 6, 15)));
    }

    #[test]
    fn test_draw_vector() {
        // (104229 * 9301 + 49297) mod 233280 = 204826
        assert_eq!(draw(104229), 204826.0 / 233280.0);
        assert_eq!(draw(104229), draw(104229));
    }

    #[test]
    fn test_default_birth_year_is_1990() {
        assert_eq!(
            derive_seed("철수", None, date(2024, 6, 15)),
            derive_seed("철수", Some(1990), date(2024, 6, 15))
        );
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        for seed in 0..5000 {
            let fraction = draw(seed);
            assert!((0.0..1.0).contains(&fraction));
            let s = scores(fraction);
            for score in [s.overall, s.love, s.money, s.health, s.work] {
                assert!((1..=100).contains(&score), "score {score} out of range for seed {seed}");
            }
            for n in lucky_numbers(fraction) {
                assert!((1..=100).contains(&n));
            }
        }
    }

    #[test]
    fn test_score_vector() {
        let fraction = draw(104229);
        let s = scores(fraction);
        assert_eq!(s.overall, 88);
        assert_eq!(s.love, 8);
        assert_eq!(s.money, 1);
        assert_eq!(s.health, 93);
        assert_eq!(s.work, 82);
        assert_eq!(lucky_color(fraction), "검정");
        assert_eq!(lucky_numbers(fraction), [93, 86, 79]);
    }

    #[test]
    fn test_daily_luck_is_deterministic() {
        let a = daily_luck("철수", "male", Some(1990), date(2024, 6, 15));
        let b = daily_luck("철수", "male", Some(1990), date(2024, 6, 15));
        assert_eq!(a, b);
        assert_eq!(a.date, "2024-06-15");
        assert!(a.detailed_fortune.contains("철수님의 6월 15일 운세"));
        assert!(a.detailed_fortune.contains(&format!("종합운: {}점", a.luck_scores.overall)));
    }

    #[test]
    fn test_weekly_luck_starts_on_sunday() {
        // 2024-06-15는 토요일, 주의 시작은 2024-06-09 일요일
        let weekly = weekly_luck("철수", Some(1990), date(2024, 6, 15));
        assert_eq!(weekly.week_start, "2024-06-09");
        assert_eq!(weekly.weekly_fortunes.len(), 7);
        assert_eq!(weekly.weekly_fortunes[0].day, "일");
        assert_eq!(weekly.weekly_fortunes[0].date, 9);
        assert_eq!(weekly.weekly_fortunes[6].day, "토");
        assert_eq!(weekly.weekly_fortunes[6].date, 15);

        // 각 요일은 그 날짜의 일일 운세와 같은 점수
        let saturday = daily_luck("철수", "male", Some(1990), date(2024, 6, 15));
        assert_eq!(weekly.weekly_fortunes[6].overall, saturday.luck_scores.overall);
    }

    #[test]
    fn test_weekly_advice_bands() {
        assert!(weekly_advice(80.0).contains("전반적으로 좋은 운세"));
        assert!(weekly_advice(70.0).contains("전반적으로 좋은 운세"));
        assert!(weekly_advice(50.0).contains("안정적인 운세"));
        assert!(weekly_advice(49.9).contains("신중하게 행동"));
    }

    #[test]
    fn test_luck_advice_bands() {
        assert!(luck_advice(80).contains("순조롭게"));
        assert!(luck_advice(60).contains("좋은 하루"));
        assert!(luck_advice(40).contains("평범한 하루"));
        assert!(luck_advice(39).contains("조심스럽게"));
    }

    #[test]
    fn test_zodiac_daily_is_total_order() {
        let entries = zodiac_daily(date(2024, 6, 15));
        assert_eq!(entries.len(), 12);

        let mut ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=12).collect::<Vec<_>>());

        for pair in entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            // 동점은 띠 배열에서 앞선 동물이 먼저
            if pair[0].score == pair[1].score {
                let first = ZODIAC_ANIMALS.iter().position(|a| *a == pair[0].zodiac).unwrap();
                let second = ZODIAC_ANIMALS.iter().position(|a| *a == pair[1].zodiac).unwrap();
                assert!(first < second);
            }
        }
    }

    #[test]
    fn test_zodiac_daily_is_deterministic() {
        assert_eq!(zodiac_daily(date(2024, 6, 15)), zodiac_daily(date(2024, 6, 15)));
    }

    #[test]
    fn test_zodiac_message_bands() {
        assert_eq!(zodiac_message(0, 70), "오늘은 기회가 많이 찾아올 것입니다.");
        assert_eq!(zodiac_message(0, 69), "신중한 판단이 필요한 날입니다.");
    }
}
