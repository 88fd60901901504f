//! Static yes/no question sets per symptom category.
//!
//! Presentation order is clinical priority order. Stroke, bleeding and
//! consciousness have no questionnaire: their keywords always route to the
//! emergency branch first.

use super::types::{SymptomCategory, TriageQuestion};

const fn q(
    id: &'static str,
    category: SymptomCategory,
    prompt_primary: &'static str,
    prompt_secondary: &'static str,
    key: &'static str,
    is_emergency_indicator: bool,
) -> TriageQuestion {
    TriageQuestion {
        id,
        category,
        prompt_primary,
        prompt_secondary,
        key,
        is_emergency_indicator,
    }
}

use SymptomCategory::*;

static CHEST_PAIN_QUESTIONS: [TriageQuestion; 4] = [
    q("cp_1", ChestPain, "ပြင်းထန်သော နာကျင်မှု ရှိပါသလား?", "Is the pain severe?", "severe_pain", true),
    q("cp_2", ChestPain, "ခွေးပြစ် ထွက်နေပါသလား?", "Are you sweating?", "sweating", true),
    q("cp_3", ChestPain, "နာကျင်မှု လက်သို့ ပျံ့နှံ့နေပါသလား?", "Is the pain spreading to your arm?", "arm_spread", true),
    q("cp_4", ChestPain, "အသက်ရှူ ခက်ခဲနေပါသလား?", "Are you having difficulty breathing?", "breathing_difficulty", true),
];

static BREATHING_QUESTIONS: [TriageQuestion; 3] = [
    q("br_1", Breathing, "ရုတ်တရက် စတင်ခဲ့ပါသလား?", "Did it start suddenly?", "sudden_onset", true),
    q("br_2", Breathing, "နှုတ်ခမ်း သို့ လက်သည်းပြာ နေပါသလား?", "Are your lips or fingernails turning blue?", "cyanosis", true),
    q("br_3", Breathing, "ရင်ဘတ်တွင် နာကျင်မှု ရှိပါသလား?", "Do you have chest pain?", "chest_pain_with_breathing", true),
];

static FEVER_CHILD_QUESTIONS: [TriageQuestion; 4] = [
    q("fc_1", FeverChild, "ကလေး အသက် ၃ လ အောက် ဖြစ်ပါသလား?", "Is the child under 3 months old?", "infant_age", true),
    q("fc_2", FeverChild, "ကလေး တက်ခြင်း ရှိပါသလား?", "Is the child having convulsions/seizures?", "child_seizure", true),
    q("fc_3", FeverChild, "ကလေး ငိုခြင်း ရပ်တန့်သွားပါသလား?", "Has the child become unusually quiet/stopped crying?", "child_lethargic", true),
    q("fc_4", FeverChild, "အဖျား ၃၈.၅°C ထက် များပါသလား?", "Is the temperature above 38.5°C?", "child_high_temp", false),
];

static HEADACHE_QUESTIONS: [TriageQuestion; 4] = [
    q("hd_1", Headache, "ရုတ်တရက် ပြင်းထန်စွာ ခေါင်းကိုက်လာပါသလား?", "Did the headache come on suddenly and severely?", "sudden_severe", true),
    q("hd_2", Headache, "လည်ပင်း ခိုင်မာနေပါသလား?", "Do you have a stiff neck?", "stiff_neck", true),
    q("hd_3", Headache, "အမြင်အာရုံ ပြောင်းလဲမှု ရှိပါသလား?", "Are you experiencing vision changes?", "vision_changes", true),
    q("hd_4", Headache, "အော့အန် ရှိပါသလား?", "Are you vomiting?", "headache_vomiting", false),
];

static ABDOMINAL_QUESTIONS: [TriageQuestion; 4] = [
    q("ab_1", Abdominal, "ပြင်းထန်သော နာကျင်မှု ရှိပါသလား?", "Is the pain severe?", "severe_abdominal", true),
    q("ab_2", Abdominal, "သွေးအန် သို့ သွေးဝမ်းသွား ရှိပါသလား?", "Are you vomiting blood or passing blood in stool?", "blood_gi", true),
    q("ab_3", Abdominal, "ဖျား နေပါသလား?", "Do you have a fever?", "abdominal_fever", false),
    q("ab_4", Abdominal, "၂၄ နာရီ ထက်ပို ကြာပါပြီလား?", "Has it lasted more than 24 hours?", "duration_24h", false),
];

static INJURY_QUESTIONS: [TriageQuestion; 4] = [
    q("in_1", Injury, "အရိုးကျိုး ဟု ထင်ပါသလား?", "Do you think a bone might be broken?", "possible_fracture", true),
    q("in_2", Injury, "သွေးထွက်များ နေပါသလား?", "Is there heavy bleeding?", "injury_bleeding", true),
    q("in_3", Injury, "ခေါင်းထိခိုက်ခဲ့ပါသလား?", "Was your head injured?", "head_injury", true),
    q("in_4", Injury, "ရွေ့လျားရန် ခက်ခဲနေပါသလား?", "Is it difficult to move?", "mobility_issue", false),
];

static FEVER_QUESTIONS: [TriageQuestion; 4] = [
    q("fv_1", Fever, "အပူချိန် ၃၉°C (၁၀၂°F) ထက် များပါသလား?", "Is your temperature above 39°C (102°F)?", "high_temp", false),
    q("fv_2", Fever, "၃ ရက်ထက် ပိုကြာ ဖျားနေပါသလား?", "Have you had a fever for more than 3 days?", "prolonged_fever", false),
    q("fv_3", Fever, "အော့အန် သို့ ဝမ်းလျှော ရှိပါသလား?", "Do you have vomiting or diarrhea?", "gi_symptoms", false),
    q("fv_4", Fever, "အသက်ရှူ ခက်ခဲနေပါသလား?", "Are you having difficulty breathing?", "fever_breathing", true),
];

/// Ordered questions for a category. Empty means no questionnaire exists
/// and the caller should fall through to normal chat.
pub fn questions_for(category: SymptomCategory) -> &'static [TriageQuestion] {
    match category {
        ChestPain => &CHEST_PAIN_QUESTIONS,
        Breathing => &BREATHING_QUESTIONS,
        FeverChild => &FEVER_CHILD_QUESTIONS,
        Headache => &HEADACHE_QUESTIONS,
        Abdominal => &ABDOMINAL_QUESTIONS,
        Injury => &INJURY_QUESTIONS,
        Fever => &FEVER_QUESTIONS,
        Stroke | Bleeding | Consciousness => &[],
    }
}

pub fn find_question(category: SymptomCategory, id: &str) -> Option<&'static TriageQuestion> {
    questions_for(category).iter().find(|q| q.id == id)
}
