use parsed_text::{segment, Config, Error, Extractor, Pattern, Render, Segment};

const WEBSITE: &str = "hello my website is http://foo.bar, bar is good.";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn children<H, X>(segments: &[Segment<H, X>]) -> Vec<&str> {
    segments.iter().map(|s| s.children.as_str()).collect()
}

#[test]
fn no_patterns() {
    init();
    let none: Vec<Pattern> = vec![];
    assert_eq!(children(&segment("Some Text", &none).unwrap()), vec!["Some Text"]);

    let segs = segment("", &none).unwrap();
    assert_eq!(children(&segs), vec![""]);
    assert!(segs[0].is_plain());
}

#[test]
fn no_match() {
    let patterns: Vec<Pattern> = vec![Pattern::regex("abcdef")];
    assert_eq!(children(&segment("Some Text", &patterns).unwrap()), vec!["Some Text"]);

    let segs = segment("", &patterns).unwrap();
    assert_eq!(children(&segs), vec![""]);
}

#[test]
fn whole_text_match() {
    let patterns: Vec<Pattern> = vec![Pattern::regex("abcdef")];
    let segs = segment("abcdef", &patterns).unwrap();
    assert_eq!(children(&segs), vec!["abcdef"]);
    assert!(!segs[0].is_plain());
}

#[test]
fn text_parts() {
    let patterns: Vec<Pattern> = vec![Pattern::regex("bar")];
    assert_eq!(
        children(&segment(WEBSITE, &patterns).unwrap()),
        vec!["hello my website is http://foo.", "bar", ", ", "bar", " is good."]
    );
}

#[test]
fn all_urls() {
    let urls = ["https://website.bz", "http://website2.it", "https://t.co/hashKey"];
    let text = format!(
        "this is my website {} and this is also {} ig this one also {}",
        urls[0], urls[1], urls[2]
    );
    let patterns: Vec<Pattern> = vec![Pattern::regex(
        r"(?i)(https?://|www\.)[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-z]{1,6}\b([-a-zA-Z0-9@:%_\+.~#?&/=]*)",
    )];

    let segs = segment(&text, &patterns).unwrap();
    assert_eq!(segs[1].children, urls[0]);
    assert_eq!(segs[3].children, urls[1]);
    assert_eq!(segs[5].children, urls[2]);
    assert_eq!(segs.len(), 6);
}

fn expect_foo(value: &str) -> bool {
    value == "foo"
}

#[test]
fn handles_are_passed_through() {
    let text = "hello foo";
    let patterns: Vec<Pattern<fn(&str) -> bool>> =
        vec![Pattern::regex("foo").handle(expect_foo as fn(&str) -> bool)];

    let segs = segment(text, &patterns).unwrap();
    assert!(segs[0].is_plain());
    assert_eq!(segs[0].children, "hello ");
    assert_eq!(segs[1].children, "foo");

    let on_press = segs[1].handle().unwrap();
    assert!(on_press(segs[1].source(text)));
    assert!(segs[0].handle().is_none());
}

#[test]
fn extra_fields_are_passed_through() {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Style {
        bold: bool,
    }

    let patterns: Vec<Pattern<(), Style>> = vec![
        Pattern::literal("foo").extra(Style { bold: true }),
        Pattern::literal("bar"),
    ];
    let segs = segment("foo bar", &patterns).unwrap();
    let styles: Vec<_> = segs.iter().map(|s| s.matched.as_ref().map(|m| m.extra.clone())).collect();
    assert_eq!(
        styles,
        vec![Some(Style { bold: true }), None, Some(Style { bold: false })]
    );
    assert_eq!(segs[2].matched.as_ref().unwrap().pattern, 1);
}

#[test]
fn parsed_only_once() {
    let patterns: Vec<Pattern> = vec![
        Pattern::regex(r"(https?://)?([\da-z\.-]+)\.([a-z\.]{2,6})([/\w \.-]*)*/?"),
        Pattern::regex("bar"),
    ];
    let segs = segment(WEBSITE, &patterns).unwrap();
    assert_eq!(
        children(&segs),
        vec!["hello my website is ", "http://foo.bar", ", ", "bar", " is good."]
    );
    let owners: Vec<_> = segs.iter().map(|s| s.matched.as_ref().map(|m| m.pattern)).collect();
    assert_eq!(owners, vec![None, Some(0), None, Some(1), None]);
}

#[test]
fn respects_parsing_order() {
    let patterns: Vec<Pattern> = vec![
        Pattern::regex("bar"),
        Pattern::regex(r"^(https?://)?([\da-z\.-]+)\.([a-z\.]{2,6})([/\w \.-]*)*/?$"),
    ];
    assert_eq!(
        children(&segment(WEBSITE, &patterns).unwrap()),
        vec!["hello my website is http://foo.", "bar", ", ", "bar", " is good."]
    );
}

#[test]
fn static_render() {
    let patterns: Vec<Pattern> =
        vec![Pattern::regex(r"(?i)\[(@[^:]+):([^\]]+)\]").render(Render::text("foo"))];
    let segs = segment("Mention [@michel:561316513]", &patterns).unwrap();
    assert_eq!(children(&segs), vec!["Mention ", "foo"]);
    assert_eq!(segs[1].source("Mention [@michel:561316513]"), "[@michel:561316513]");
}

#[test]
fn computed_render_gets_groups() {
    let patterns: Vec<Pattern> = vec![Pattern::regex(r"(?i)\[(@[^:]+):([^\]]+)\]").render(
        Render::with(|full, groups| {
            assert_eq!(full, "[@michel:561316513]");
            assert_eq!(groups, [Some(full), Some("@michel"), Some("561316513")]);
            format!("^^{}^^", groups[1].unwrap_or_default())
        }),
    )];

    let segs = segment("Mention [@michel:561316513]", &patterns).unwrap();
    assert_eq!(segs[0].children, "Mention ");
    assert_eq!(segs[1].children, "^^@michel^^");
}

#[test]
fn literal_parts() {
    let patterns: Vec<Pattern> = vec![Pattern::literal("bar")];
    assert_eq!(
        children(&segment(WEBSITE, &patterns).unwrap()),
        vec!["hello my website is http://foo.", "bar", ", ", "bar", " is good."]
    );
}

#[test]
fn literal_render() {
    let patterns: Vec<Pattern> = vec![Pattern::literal("bar").render(Render::with(|_, groups| {
        assert_eq!(groups, [Some("bar")]);
        "^^bar^^".to_owned()
    }))];

    let segs = segment("foo bar baz", &patterns).unwrap();
    assert_eq!(children(&segs), vec!["foo ", "^^bar^^", " baz"]);
    assert!(segs[0].is_plain() && segs[2].is_plain());
}

#[test]
fn literal_is_verbatim() {
    let patterns: Vec<Pattern> = vec![Pattern::literal("a.c")];
    assert_eq!(children(&segment("abc a.c A.C", &patterns).unwrap()), vec!["abc ", "a.c", " A.C"]);
}

#[test]
fn max_matches() {
    let patterns: Vec<Pattern> = vec![Pattern::literal("bar").max_matches(1), Pattern::regex("ba")];
    let segs = segment("bar bar bar", &patterns).unwrap();
    assert_eq!(children(&segs), vec!["bar", " ", "ba", "r ", "ba", "r"]);
}

#[test]
fn empty_render_keeps_segment() {
    let patterns: Vec<Pattern> = vec![Pattern::literal("x").render("")];
    let segs = segment("axb", &patterns).unwrap();
    assert_eq!(children(&segs), vec!["a", "", "b"]);
    assert_eq!(segs[1].span, 1..2);
}

#[test]
fn config_flags() {
    let patterns: Vec<Pattern> = vec![Pattern::regex("bar"), Pattern::literal("Foo")];
    let ex = Extractor::with_config(patterns, &Config::new().case_insensitive(true)).unwrap();
    assert_eq!(children(&ex.segment("BAR foo Foo").unwrap()), vec!["BAR", " foo ", "Foo"]);
}

#[test]
fn extractor_is_reusable() {
    let ex: Extractor = Extractor::new([Pattern::regex(r"\d+")]).unwrap();
    assert_eq!(ex.patterns().len(), 1);
    for _ in 0..3 {
        assert_eq!(children(&ex.segment("a1b22").unwrap()), vec!["a", "1", "b", "22"]);
    }
}

#[test]
fn invalid_regex() {
    let patterns: Vec<Pattern> = vec![Pattern::regex("bar"), Pattern::regex("[unclosed")];
    let err = segment("bar", &patterns).unwrap_err();
    assert!(matches!(err, Error::Regex { index: 1, .. }));
    assert!(err.to_string().starts_with("pattern 1: invalid regular expression"));
}

#[test]
fn render_failure() {
    let patterns: Vec<Pattern> = vec![Pattern::regex(r"\d+").render(Render::try_with(|full, _| {
        full.parse::<u8>().map(|n| n.to_string())
    }))];
    assert!(segment("7 and 42", &patterns).is_ok());

    let err = segment("7 and 4200", &patterns).unwrap_err();
    assert!(matches!(err, Error::Render { index: 0, .. }));
}

#[cfg(feature = "serde")]
#[test]
fn serialize_segments() {
    let patterns: Vec<Pattern<(), u32>> = vec![Pattern::literal("b").extra(9)];
    let segs = segment("ab", &patterns).unwrap();
    let json = serde_json::to_value(&segs).unwrap();
    assert_eq!(json[0]["children"], "a");
    assert!(json[0].get("matched").is_none());
    assert_eq!(json[1]["span"]["start"], 1);
    assert_eq!(json[1]["matched"]["extra"], 9);
}
