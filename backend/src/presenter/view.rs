//! Per-render page view owning the three region handles.

use crate::domain::AggregateResult;

use super::escape::escape_html;
use super::regions::{LOADING_TEXT, render_country, render_failure, render_news, render_user};

/// Which card a region holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    User,
    Country,
    News,
}

impl RegionKind {
    /// Element id of the region in the page document.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::User => "userCard",
            Self::Country => "countryCard",
            Self::News => "newsBox",
        }
    }
}

/// One writable page region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    kind: RegionKind,
    html: String,
}

impl Region {
    /// An empty region of the given kind.
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            html: String::new(),
        }
    }

    /// Current inner HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the inner HTML.
    pub fn set(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Empty the region.
    pub fn clear(&mut self) {
        self.html.clear();
    }

    fn to_element(&self) -> String {
        format!(
            "<div id=\"{}\">{}</div>",
            self.kind.element_id(),
            self.html
        )
    }
}

/// The three regions a [`ProfileView`] writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegions {
    pub user: Region,
    pub country: Region,
    pub news: Region,
}

impl Default for ViewRegions {
    fn default() -> Self {
        Self {
            user: Region::new(RegionKind::User),
            country: Region::new(RegionKind::Country),
            news: Region::new(RegionKind::News),
        }
    }
}

/// Renders profile states into its regions.
///
/// # Examples
/// ```
/// use profile_aggregator::presenter::{ProfileView, ViewRegions};
///
/// let mut view = ProfileView::new(ViewRegions::default());
/// view.show_failure("HTTP 500 <down>");
/// assert_eq!(view.regions().user.html(), "Error<br>HTTP 500 &lt;down&gt;");
/// assert!(view.regions().news.html().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ProfileView {
    regions: ViewRegions,
}

impl ProfileView {
    /// A view writing into `regions`, which are left as given.
    pub fn new(regions: ViewRegions) -> Self {
        Self { regions }
    }

    /// Read access to the regions, for callers that place them in a page.
    pub fn regions(&self) -> &ViewRegions {
        &self.regions
    }

    /// Loading text in the user region, other regions empty.
    pub fn show_loading(&mut self) {
        self.regions.user.set(LOADING_TEXT);
        self.regions.country.clear();
        self.regions.news.clear();
    }

    /// Render every region from a successful aggregate.
    pub fn show_result(&mut self, result: &AggregateResult) {
        self.regions.user.set(render_user(&result.user));
        self.regions
            .country
            .set(render_country(&result.country, Some(&result.exchange_rates)));
        self.regions.news.set(render_news(Some(&result.news)));
    }

    /// Error state: message in the user region, other regions cleared.
    pub fn show_failure(&mut self, message: &str) {
        self.regions.user.set(render_failure(message));
        self.regions.country.clear();
        self.regions.news.clear();
    }

    /// Wrap the regions in a standalone HTML document titled `title`.
    pub fn into_document(self, title: &str) -> String {
        let ViewRegions {
            user,
            country,
            news,
        } = self.regions;
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 720px; margin: 24px auto; }}
    .card {{ border: 1px solid #ddd; border-radius: 8px; padding: 12px; margin: 12px 0; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <p><a id="loadUser" href="/profile">Load random user</a></p>
  {user}
  {country}
  {news}
</body>
</html>
"#,
            title = escape_html(title),
            user = user.to_element(),
            country = country.to_element(),
            news = news.to_element(),
        )
    }
}
