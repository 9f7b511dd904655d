use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// 천간 (10개)
pub const HEAVENLY_STEMS: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

/// 지지 (12개)
pub const EARTHLY_BRANCHES: [&str; 12] =
    ["자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해"];

/// 십이지지 동물
pub const ZODIAC_ANIMALS: [&str; 12] =
    ["쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지"];

/// 간지 한 쌍. 60갑자의 한 조합을 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GanJi {
    pub gan: &'static str,
    pub ji: &'static str,
}

/// 년주는 띠를 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearGanJi {
    pub gan: &'static str,
    pub ji: &'static str,
    pub zodiac: &'static str,
}

/// 사주 네 기둥 (년주/월주/일주/시주).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SajuChart {
    pub year: YearGanJi,
    pub month: GanJi,
    pub day: GanJi,
    pub time: GanJi,
}

// Euclidean remainder keeps every input in-bounds, so pre-calendar or
// otherwise nonsensical dates still map to a valid stem/branch.
fn cycle(value: i64, len: usize) -> usize {
    value.rem_euclid(len as i64) as usize
}

pub fn stem_index(gan: &str) -> Option<usize> {
    HEAVENLY_STEMS.iter().position(|s| *s == gan)
}

/// 년도에서 간지 계산: 간 = (년 - 4) mod 10, 지 = (년 - 4) mod 12.
pub fn year_ganji(year: i32) -> YearGanJi {
    let gan_idx = cycle(i64::from(year) - 4, 10);
    let ji_idx = cycle(i64::from(year) - 4, 12);
    YearGanJi {
        gan: HEAVENLY_STEMS[gan_idx],
        ji: EARTHLY_BRANCHES[ji_idx],
        zodiac: ZODIAC_ANIMALS[ji_idx],
    }
}

/// 월에서 간지 계산. 월간은 년간에 종속된다 (오호둔 단순화 공식).
pub fn month_ganji(year: i32, month: i32) -> GanJi {
    let year_gan = cycle(i64::from(year) - 4, 10);
    let month_gan_base = (year_gan % 5) * 2;
    GanJi {
        gan: HEAVENLY_STEMS[cycle(month_gan_base as i64 + i64::from(month) - 1, 10)],
        ji: EARTHLY_BRANCHES[cycle(i64::from(month) + 1, 12)],
    }
}

/// 일에서 간지 계산. 1900-01-01을 0일로 놓는 고정 근사 공식이며, 전통
/// 만세력과 일치시키려는 시도가 아니다. 공식 자체가 계약이므로 바꾸지 않는다.
pub fn day_ganji(year: i32, month: i32, day: i32) -> GanJi {
    let offset = day_offset(year, month, day);
    GanJi {
        gan: HEAVENLY_STEMS[cycle(offset + 1, 10)],
        ji: EARTHLY_BRANCHES[cycle(offset + 1, 12)],
    }
}

fn day_offset(year: i32, month: i32, day: i32) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    (rolled_date(year, month, day) - epoch).num_days()
}

// Out-of-range months and days roll over arithmetically (month 13 is next
// year's January, day 32 spills into the next month), keeping the function
// total over all integer inputs.
fn rolled_date(year: i32, month: i32, day: i32) -> NaiveDate {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let y = months.div_euclid(12);
    let m = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(y as i32, m, 1).unwrap_or_default();
    first
        .checked_add_signed(Duration::days(i64::from(day) - 1))
        .unwrap_or(first)
}

/// 시간에서 간지 계산. 2시간 단위 시진으로 나누고, 시간은 일간에 종속된다.
pub fn hour_ganji(hour: i32, day_gan: &str) -> GanJi {
    let time_slot = i64::from(hour).div_euclid(2);
    let day_gan_idx = stem_index(day_gan).unwrap_or(0) as i64;
    GanJi {
        gan: HEAVENLY_STEMS[cycle(day_gan_idx * 2 + time_slot, 10)],
        ji: EARTHLY_BRANCHES[cycle(time_slot, 12)],
    }
}

/// 네 기둥을 한 번에 계산한다. 시주는 일간을 기준으로 한다.
pub fn build_chart(year: i32, month: i32, day: i32, hour: i32) -> SajuChart {
    let day_pillar = day_ganji(year, month, day);
    SajuChart {
        year: year_ganji(year),
        month: month_ganji(year, month),
        day: day_pillar,
        time: hour_ganji(hour, day_pillar.gan),
    }
}
