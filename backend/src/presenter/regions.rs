//! Markup for the three page regions.
//!
//! Each function returns the inner HTML of one region. Element text goes
//! through [`escape_html`]; `href` and `src` values go through
//! [`escape_attribute`].

use crate::domain::{CountryInfo, ExchangeRates, NOT_AVAILABLE, NewsDigest, UserProfile};

use super::escape::{escape_attribute, escape_html};

/// Text shown in the user region while a profile is being fetched.
pub const LOADING_TEXT: &str = "Loading...";

/// Shown in the news region when no digest was supplied.
pub const NO_NEWS_DATA_TEXT: &str = "No news data.";

/// Shown in the news region when the digest has neither note nor articles.
pub const NO_ARTICLES_TEXT: &str = "No articles found.";

/// Render the person card.
pub fn render_user(user: &UserProfile) -> String {
    format!(
        r#"<div class="card">
  <img src="{picture}" width="120" alt="user"/>
  <h2>{first} {last}</h2>
  <p><b>Gender:</b> {gender}</p>
  <p><b>Age:</b> {age}</p>
  <p><b>City:</b> {city}</p>
  <p><b>Country:</b> {country}</p>
  <p><b>Address:</b> {address}</p>
</div>"#,
        picture = escape_attribute(&user.picture),
        first = escape_html(&user.first_name),
        last = escape_html(&user.last_name),
        gender = escape_html(&user.gender),
        age = user.age,
        city = escape_html(&user.city),
        country = escape_html(&user.country),
        address = escape_html(&user.full_address),
    )
}

/// Render the country card with its exchange rate lines.
///
/// The rate base falls back to the country's currency code, then to `N/A`,
/// when `rates` is absent or carries an empty base.
pub fn render_country(country: &CountryInfo, rates: Option<&ExchangeRates>) -> String {
    let languages = if country.languages.is_empty() {
        NOT_AVAILABLE.to_owned()
    } else {
        country.languages.join(", ")
    };
    let base = rates
        .map(|rates| rates.base.as_str())
        .filter(|base| !base.is_empty())
        .or(country.currency_code.as_deref())
        .unwrap_or(NOT_AVAILABLE);
    let usd = rates.map_or_else(|| NOT_AVAILABLE.to_owned(), |rates| rates.usd.to_string());
    let kzt = rates.map_or_else(|| NOT_AVAILABLE.to_owned(), |rates| rates.kzt.to_string());
    let flag = country
        .flag
        .as_deref()
        .map(|flag| format!(r#"<img src="{}" width="120" alt="flag"/>"#, escape_attribute(flag)))
        .unwrap_or_default();
    let note = rates
        .and_then(|rates| rates.note.as_deref())
        .filter(|note| !note.is_empty())
        .map(|note| {
            format!(
                r#"<p style="opacity:.7; font-size:12px;">{}</p>"#,
                escape_html(note)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card">
  <h2>Country Info</h2>
  {flag}
  <p><b>Name:</b> {name}</p>
  <p><b>Capital:</b> {capital}</p>
  <p><b>Languages:</b> {languages}</p>
  <p><b>Currency:</b> {code} ({currency_name})</p>
  <hr />
  <p><b>Exchange Rates:</b></p>
  <p>1 {base} = {usd} USD</p>
  <p>1 {base} = {kzt} KZT</p>
  {note}
</div>"#,
        name = escape_html(&country.name),
        capital = escape_html(&country.capital),
        languages = escape_html(&languages),
        code = escape_html(country.currency_code.as_deref().unwrap_or(NOT_AVAILABLE)),
        currency_name = escape_html(&country.currency_name),
        base = escape_html(base),
        usd = escape_html(&usd),
        kzt = escape_html(&kzt),
    )
}

/// Render the news card.
pub fn render_news(news: Option<&NewsDigest>) -> String {
    let Some(news) = news else {
        return news_card("News", &format!("<p>{NO_NEWS_DATA_TEXT}</p>"));
    };
    if let Some(note) = news.note.as_deref().filter(|note| !note.is_empty()) {
        return news_card("News", &format!("<p>{}</p>", escape_html(note)));
    }
    if news.articles.is_empty() {
        return news_card("News (Top 5)", &format!("<p>{NO_ARTICLES_TEXT}</p>"));
    }

    let items: String = news
        .articles
        .iter()
        .map(|article| {
            format!(
                r#"
    <li style="margin-bottom:10px;">
      <a href="{url}" target="_blank" rel="noopener">{title}</a>
      <div style="font-size:12px; opacity:0.7;">{source}</div>
    </li>"#,
                url = escape_attribute(&article.url),
                title = escape_html(&article.title),
                source = escape_html(&article.source),
            )
        })
        .collect();
    news_card(
        "News (Top 5)",
        &format!("<ul style=\"padding-left:18px; margin:0;\">{items}\n  </ul>"),
    )
}

/// Render the user-region content for a fatal failure.
pub fn render_failure(message: &str) -> String {
    format!("Error<br>{}", escape_html(message))
}

fn news_card(heading: &str, body: &str) -> String {
    format!("<div class=\"card\">\n  <h2>{heading}</h2>\n  {body}\n</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, RateValue};
    use rstest::{fixture, rstest};

    #[fixture]
    fn user() -> UserProfile {
        UserProfile {
            first_name: "Zoë".into(),
            last_name: "<b>Bold</b>".into(),
            gender: "female".into(),
            age: 29,
            picture: "https://randomuser.me/api/portraits/women/1.jpg".into(),
            city: "Nantes".into(),
            country: "France".into(),
            full_address: "Rue A&B 3".into(),
        }
    }

    #[fixture]
    fn country() -> CountryInfo {
        CountryInfo {
            name: "France".into(),
            capital: "Paris".into(),
            languages: vec!["French".into(), "Breton".into()],
            currency_code: Some("EUR".into()),
            currency_name: "Euro".into(),
            flag: Some("https://flagcdn.com/w320/fr.png".into()),
        }
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.into(),
            url: "https://news.example/a?x=1&y=2".into(),
            source: "Wire".into(),
            image: None,
        }
    }

    #[rstest]
    fn user_card_escapes_every_field(user: UserProfile) {
        let html = render_user(&user);
        assert!(html.contains("<h2>Zoë &lt;b&gt;Bold&lt;/b&gt;</h2>"));
        assert!(html.contains("<p><b>Age:</b> 29</p>"));
        assert!(html.contains("<p><b>Address:</b> Rue A&amp;B 3</p>"));
    }

    #[rstest]
    fn country_card_lists_rates_and_omits_absent_note(country: CountryInfo) {
        let rates = ExchangeRates {
            usd: RateValue::Rate(1.08),
            kzt: RateValue::Rate(512.5),
            ..ExchangeRates::unavailable(Some("EUR"))
        };
        let html = render_country(&country, Some(&rates));
        assert!(html.contains(r#"alt="flag""#));
        assert!(html.contains("<p><b>Languages:</b> French, Breton</p>"));
        assert!(html.contains("<p><b>Currency:</b> EUR (Euro)</p>"));
        assert!(html.contains("<p>1 EUR = 1.08 USD</p>"));
        assert!(html.contains("<p>1 EUR = 512.5 KZT</p>"));
        assert!(!html.contains("opacity:.7"));
    }

    #[rstest]
    fn country_card_without_rates_falls_back_to_currency_code(country: CountryInfo) {
        let html = render_country(&country, None);
        assert!(html.contains("<p>1 EUR = N/A USD</p>"));
        assert!(html.contains("<p>1 EUR = N/A KZT</p>"));
    }

    #[rstest]
    fn country_card_shows_note_and_placeholders(mut country: CountryInfo) {
        country.flag = None;
        country.languages.clear();
        country.currency_code = None;
        country.currency_name = NOT_AVAILABLE.into();
        let rates = ExchangeRates::unavailable(None).with_note("Missing EXCHANGE_RATE_API_KEY in .env");

        let html = render_country(&country, Some(&rates));

        assert!(!html.contains(r#"alt="flag""#));
        assert!(html.contains("<p><b>Languages:</b> N/A</p>"));
        assert!(html.contains("<p><b>Currency:</b> N/A (N/A)</p>"));
        assert!(html.contains("<p>1 N/A = N/A USD</p>"));
        assert!(html.contains("Missing EXCHANGE_RATE_API_KEY in .env</p>"));
    }

    #[test]
    fn news_without_digest_says_so() {
        assert!(render_news(None).contains(NO_NEWS_DATA_TEXT));
    }

    #[test]
    fn news_note_replaces_the_list() {
        let digest = NewsDigest::with_note("France", "No news found");
        let html = render_news(Some(&digest));
        assert!(html.contains("<p>No news found</p>"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn empty_news_without_note_says_no_articles() {
        let digest = NewsDigest {
            query: "France".into(),
            articles: Vec::new(),
            note: None,
        };
        assert!(render_news(Some(&digest)).contains(NO_ARTICLES_TEXT));
    }

    #[test]
    fn news_list_links_escaped_titles() {
        let digest = NewsDigest {
            query: "France".into(),
            articles: vec![article("France <live>"), article("France & Spain")],
            note: None,
        };
        let html = render_news(Some(&digest));
        assert_eq!(html.matches("<li ").count(), 2);
        assert!(html.contains(r#"href="https://news.example/a?x=1&amp;y=2""#));
        assert!(html.contains(">France &lt;live&gt;</a>"));
        assert!(html.contains(">France &amp; Spain</a>"));
    }

    const QUOTE_BREAKOUT: &str = r#"https://x.example/" onmouseover="alert(1)"#;

    #[test]
    fn news_links_cannot_close_the_href_attribute() {
        let mut breakout = article("France today");
        breakout.url = QUOTE_BREAKOUT.into();
        let digest = NewsDigest {
            query: "France".into(),
            articles: vec![breakout],
            note: None,
        };
        let html = render_news(Some(&digest));
        assert!(!html.contains(r#"" onmouseover=""#));
        assert!(html.contains(r#"href="https://x.example/&quot; onmouseover=&quot;alert(1)""#));
    }

    #[rstest]
    fn user_picture_cannot_close_the_src_attribute(mut user: UserProfile) {
        user.picture = QUOTE_BREAKOUT.into();
        let html = render_user(&user);
        assert!(!html.contains(r#"" onmouseover=""#));
        assert!(html.contains("&quot; onmouseover=&quot;alert(1)"));
    }

    #[rstest]
    fn flag_cannot_close_the_src_attribute(mut country: CountryInfo) {
        country.flag = Some(QUOTE_BREAKOUT.into());
        let html = render_country(&country, None);
        assert!(!html.contains(r#"" onmouseover=""#));
        assert!(html.contains(r#"alt="flag""#));
    }

    #[test]
    fn failure_escapes_the_message() {
        assert_eq!(
            render_failure("HTTP 500 <oops>"),
            "Error<br>HTTP 500 &lt;oops&gt;"
        );
    }
}
