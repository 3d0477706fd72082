pub mod config;
pub mod util;

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use crate::util::discord::{trim_content_fits, user_mention};

    #[test]
    fn user_mention_format() {
        assert_eq!(user_mention(Id::new(571661221854707713)), "<@571661221854707713>");
    }

    #[test]
    fn trim_short_content_untouched() {
        let mut content = String::from("hello");
        trim_content_fits(&mut content);
        assert_eq!(content, "hello");
    }

    #[test]
    fn trim_long_content() {
        let mut content = "a".repeat(2500);
        trim_content_fits(&mut content);
        assert_eq!(content.chars().count(), 2000);
    }

    #[test]
    fn trim_respects_char_boundaries() {
        let mut content = "é".repeat(2100);
        trim_content_fits(&mut content);
        assert_eq!(content.chars().count(), 2000);
    }
}
