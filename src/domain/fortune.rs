use serde::Serialize;

use crate::domain::saju::{stem_index, SajuChart};

// 천간 → 오행. HEAVENLY_STEMS와 같은 순서 (갑을=목, 병정=화, 무기=토,
// 경신=금, 임계=수).
const STEM_ELEMENTS: [&str; 10] = ["목", "목", "화", "화", "토", "토", "금", "금", "수", "수"];

pub fn element_for_stem(gan: &str) -> &'static str {
    stem_index(gan).map(|i| STEM_ELEMENTS[i]).unwrap_or("토")
}

fn personality_for_zodiac(zodiac: &str) -> &'static str {
    match zodiac {
        "쥐" => "똑똑하고 재치있으며 적응력이 뛰어납니다.",
        "소" => "성실하고 끈기있으며 신뢰할 수 있습니다.",
        "호랑이" => "용감하고 리더십이 있으며 정의감이 강합니다.",
        "토끼" => "온화하고 예술적 감각이 있으며 평화를 추구합니다.",
        "용" => "카리스마가 있고 야심찬 꿈을 추구합니다.",
        "뱀" => "지혜롭고 직감이 뛰어나며 신중합니다.",
        "말" => "활동적이고 자유로우며 모험을 좋아합니다.",
        "양" => "친절하고 예술적이며 조화를 중시합니다.",
        "원숭이" => "영리하고 유머러스하며 창의적입니다.",
        "닭" => "정확하고 책임감이 있으며 완벽주의적입니다.",
        "개" => "충실하고 정직하며 정의감이 강합니다.",
        "돼지" => "관대하고 성실하며 인정이 많습니다.",
        _ => "특별한 매력을 가지고 있습니다.",
    }
}

fn fortune_for_element(element: &str) -> &'static str {
    match element {
        "목" => "성장과 발전의 기운이 강합니다. 새로운 시작에 좋은 시기입니다.",
        "화" => "열정과 활력이 넘칩니다. 인기운이 상승하고 있습니다.",
        "토" => "안정과 포용의 기운이 있습니다. 신뢰받는 시기입니다.",
        "금" => "결단력과 의지가 강합니다. 성과를 거두는 시기입니다.",
        "수" => "지혜와 유연성이 돋보입니다. 적응력이 뛰어난 시기입니다.",
        _ => "균형잡힌 좋은 운세를 가지고 있습니다.",
    }
}

pub(crate) fn gender_label(gender: &str) -> &'static str {
    if gender == "male" {
        "남성"
    } else {
        "여성"
    }
}

/// 외부 해석 호출이 실패했을 때 그대로 응답에 쓰이는 로컬 해석.
/// 표에 없는 키는 기본 문구로 대체되며, 절대 실패하지 않는다.
pub fn compose_basic_fortune(chart: &SajuChart, name: &str, gender: &str) -> String {
    let year_element = element_for_stem(chart.year.gan);

    format!(
        "\n🌟 {name}님의 사주 해석 🌟\n\n\
         📅 사주팔자\n\
         • 년주: {ygan}{yji} ({zodiac}띠)\n\
         • 월주: {mgan}{mji}\n\
         • 일주: {dgan}{dji}\n\
         • 시주: {tgan}{tji}\n\n\
         💎 성격 분석\n{zodiac}띠 성격을 가진 당신은 {personality}\n\n\
         🍀 전체 운세\n당신의 사주는 {element} 기운이 강하여 {element_fortune}\n\n\
         💼 직업운\n{career}\n\n\
         💕 연애운\n{love}\n\n\
         💰 재물운\n{wealth}\n\n\
         🏥 건강운\n{health}\n\n\
         ✨ 조언\n{advice}\n",
        name = name,
        ygan = chart.year.gan,
        yji = chart.year.ji,
        zodiac = chart.year.zodiac,
        mgan = chart.month.gan,
        mji = chart.month.ji,
        dgan = chart.day.gan,
        dji = chart.day.ji,
        tgan = chart.time.gan,
        tji = chart.time.ji,
        personality = personality_for_zodiac(chart.year.zodiac),
        element = year_element,
        element_fortune = fortune_for_element(year_element),
        career = career_fortune(chart),
        love = love_fortune(chart, gender),
        wealth = wealth_fortune(chart),
        health = health_fortune(),
        advice = advice(chart),
    )
}

fn career_fortune(chart: &SajuChart) -> String {
    format!(
        "{}일간의 특성상 창의적이고 전문적인 분야에서 두각을 나타낼 것입니다. \
         꾸준한 노력으로 큰 성과를 거둘 수 있는 시기입니다.",
        chart.day.gan
    )
}

fn love_fortune(chart: &SajuChart, gender: &str) -> String {
    format!(
        "{}으로서 매력적인 면모를 가지고 있습니다. {}띠의 특성상 진실한 사랑을 만날 가능성이 높습니다.",
        gender_label(gender),
        chart.year.zodiac
    )
}

fn wealth_fortune(chart: &SajuChart) -> String {
    format!(
        "{}월간의 영향으로 점진적인 재물 증가가 예상됩니다. \
         투자보다는 저축을 통한 안정적인 재물 관리가 좋겠습니다.",
        chart.month.gan
    )
}

fn health_fortune() -> &'static str {
    "전반적으로 건강한 체질을 가지고 있습니다. 규칙적인 생활과 적절한 운동으로 \
     더욱 건강한 삶을 유지할 수 있을 것입니다."
}

fn advice(chart: &SajuChart) -> String {
    format!(
        "당신의 사주는 {}띠의 긍정적인 면이 잘 나타나 있습니다. 자신감을 가지고 목표를 향해 \
         나아가세요. 주변 사람들과의 조화를 이루며 살아가시면 더 큰 행복을 얻을 수 있을 것입니다.",
        chart.year.zodiac
    )
}

const NAME_MEANINGS: [&str; 5] = [
    "아름다운 의미를 담고 있는 이름입니다.",
    "희망과 밝음을 상징하는 이름입니다.",
    "지혜와 총명함을 나타내는 이름입니다.",
    "성실함과 착함을 의미하는 이름입니다.",
    "건강과 장수를 기원하는 이름입니다.",
];

const NAME_FORTUNES: [&str; 5] = [
    "전반적으로 운이 좋은 이름입니다.",
    "인기운이 상승하는 이름입니다.",
    "재물운이 따르는 이름입니다.",
    "건강운이 좋은 이름입니다.",
    "사랑운이 풍부한 이름입니다.",
];

const NAME_CAREERS: [&str; 5] = [
    "창의적인 분야에서 성공할 가능성이 높습니다.",
    "리더십을 발휘하는 직업에 적합합니다.",
    "전문직에서 인정받을 수 있습니다.",
    "사람들과 소통하는 일에 재능이 있습니다.",
    "예술적 감각을 활용한 일에 좋습니다.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAnalysis {
    pub name: String,
    pub gender: String,
    pub analysis: String,
    pub name_length: usize,
    pub first_char: String,
    pub last_char: String,
}

/// 생년월일 없이 이름만으로 만드는 해석. 글자 수와 첫/끝 글자 코드로
/// 문구 표를 인덱싱한다. 사주 계산은 전혀 쓰지 않는다.
pub fn analyze_name(name: &str, gender: &str) -> NameAnalysis {
    let chars: Vec<char> = name.chars().collect();
    let name_length = chars.len();
    let first = chars.first().copied();
    let last = chars.last().copied();

    let code_sum = (first.map(|c| c as usize).unwrap_or(0)
        + last.map(|c| c as usize).unwrap_or(0))
        % NAME_FORTUNES.len();

    let analysis = format!(
        "\n🌟 {name}님의 이름 사주 🌟\n\n\
         📝 이름 분석\n\
         • 이름: {name} ({name_length}글자)\n\
         • 성별: {gender}\n\n\
         💎 이름에 담긴 의미\n{meaning}\n\n\
         🍀 이름 운세\n{fortune}\n\n\
         💼 직업운\n이름의 기운이 {career}\n\n\
         💕 인간관계\n{name}님은 주변 사람들에게 신뢰를 받는 성격으로, 좋은 인간관계를 유지할 수 있습니다.\n\n\
         ✨ 이름 조언\n{name}이라는 이름은 긍정적인 에너지를 가지고 있습니다. \
         자신감을 가지고 도전하시면 좋은 결과를 얻을 수 있을 것입니다.\n",
        name = name,
        name_length = name_length,
        gender = gender_label(gender),
        meaning = NAME_MEANINGS[name_length % NAME_MEANINGS.len()],
        fortune = NAME_FORTUNES[code_sum],
        career = NAME_CAREERS[name_length % NAME_CAREERS.len()],
    );

    NameAnalysis {
        name: name.to_owned(),
        gender: gender.to_owned(),
        analysis,
        name_length,
        first_char: first.map(String::from).unwrap_or_default(),
        last_char: last.map(String::from).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::saju::build_chart;

    #[test]
    fn test_element_lookup_with_fallback() {
        assert_eq!(element_for_stem("갑"), "목");
        assert_eq!(element_for_stem("계"), "수");
        assert_eq!(element_for_stem("없음"), "토");
    }

    #[test]
    fn test_compose_basic_fortune_embeds_chart() {
        let chart = build_chart(2024, 6, 15, 12);
        let text = compose_basic_fortune(&chart, "철수", "male");

        assert!(text.contains("철수님의 사주 해석"));
        assert!(text.contains("년주: 갑신 (원숭이띠)"));
        assert!(text.contains("원숭이띠 성격을 가진 당신은 영리하고 유머러스하며 창의적입니다."));
        // 갑년이므로 목 기운
        assert!(text.contains("목 기운이 강하여"));
        assert!(text.contains("남성으로서 매력적인 면모"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let chart = build_chart(1990, 3, 2, 7);
        assert_eq!(
            compose_basic_fortune(&chart, "영희", "female"),
            compose_basic_fortune(&chart, "영희", "female")
        );
    }

    #[test]
    fn test_analyze_name() {
        let analysis = analyze_name("김철수", "male");
        assert_eq!(analysis.name_length, 3);
        assert_eq!(analysis.first_char, "김");
        assert_eq!(analysis.last_char, "수");
        assert!(analysis.analysis.contains("김철수님의 이름 사주"));
        assert!(analysis.analysis.contains("(3글자)"));
        // 길이 3 → 의미/직업 표의 3번 항목, '김'(44608)+'수'(49688) → 운세 표 인덱스
        assert!(analysis.analysis.contains(NAME_MEANINGS[3]));
        assert!(analysis.analysis.contains(NAME_CAREERS[3]));
        assert!(analysis.analysis.contains(NAME_FORTUNES[(44608 + 49688) % 5]));
    }

    #[test]
    fn test_analyze_name_never_fails_on_single_char() {
        let analysis = analyze_name("수", "female");
        assert_eq!(analysis.first_char, analysis.last_char);
        assert_eq!(analysis.name_length, 1);
    }
}
