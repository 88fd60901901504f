//! Fixed user-facing safety text.
//!
//! Burmese mode shows the Burmese line followed by the English line, since
//! many users read medical English more easily. English mode is English only.

use crate::config::Lang;

/// Appended to model replies that contain explicit dosages or diagnoses.
pub const SAFETY_NOTE: &str = "⚠️ သတိပြုရန် - ဆေးပမာဏနှင့် ရောဂါရှာဖွေမှုအတွက် ဆရာဝန်နှင့် တိုင်ပင်ပါ။\n\
     ⚠️ Note: Please consult a doctor for specific medication dosages and diagnosis.";

const DISCLAIMER_MY: &str =
    "⚕️ ဒီ AI သည် ဆရာဝန်မဟုတ်ပါ။ အရေးပေါ် လက္ခဏာများရှိပါက ဆေးရုံသို့ ချက်ချင်းသွားပါ။";

const DISCLAIMER_EN: &str =
    "⚕️ This AI is not a doctor. If you have emergency symptoms, go to the hospital immediately.";

/// "This AI is not a doctor" disclaimer in the given language.
pub fn disclaimer(lang: Lang) -> &'static str {
    match lang {
        Lang::My => DISCLAIMER_MY,
        Lang::En => DISCLAIMER_EN,
    }
}

/// Append the disclaimer after a blank line. Already-disclaimed text is
/// returned unchanged.
pub fn with_disclaimer(text: &str, lang: Lang) -> String {
    let note = disclaimer(lang);
    if text.trim_end().ends_with(note) {
        return text.to_string();
    }
    format!("{text}\n\n{note}")
}

/// System instruction sent with every model request.
pub const SYSTEM_PROMPT: &str = "You are a helpful medical AI assistant for Myanmar. \
You provide general health information and guidance.

IMPORTANT RULES:
1. Always remind users that you are NOT a replacement for professional medical advice.
2. Never diagnose conditions. Only provide general information.
3. Never prescribe medications or suggest specific dosages.
4. Never make diagnosis statements like \"you have X disease\".
5. For emergencies, instruct users to call 192 (Myanmar ambulance) immediately.
6. Be empathetic, clear, and professional.
7. If asked about medications, advise consulting a doctor or pharmacist.
8. Support both English and Burmese languages.
9. When responding in Burmese, use simple and clear language.
10. Keep responses concise but helpful.";
