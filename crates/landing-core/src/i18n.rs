use crate::prefs::Language;

/// Strings produced by code rather than taken from `data-*` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    SendSuccess,
    SendFailure,
    SendButton,
}

impl Message {
    pub fn text(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Message::SendSuccess, Language::En) => "Message sent successfully!",
            (Message::SendSuccess, Language::Ar) => "تم إرسال الرسالة بنجاح!",
            (Message::SendFailure, Language::En) => "Failed to send message. Please try again.",
            (Message::SendFailure, Language::Ar) => {
                "فشل في إرسال الرسالة. يرجى المحاولة مرة أخرى."
            }
            (Message::SendButton, Language::En) => "Send Message",
            (Message::SendButton, Language::Ar) => "إرسال الرسالة",
        }
    }
}
