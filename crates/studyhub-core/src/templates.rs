//! Markup for module and notice states.
//!
//! These strings are stored in [`ViewState`](crate::models::ViewState)s and
//! injected into the viewer as-is. Everything interpolated here is escaped,
//! except module bodies fetched from our own origin.

use ammonia::clean_text;

use crate::catalog::{Course, Notebook, RepoSource};

/// Wrap a fetched module body with its heading.
///
/// `content` is same-origin markup and is kept verbatim: its `data-*`
/// markers drive the viewer's click delegation.
pub fn module_frame(title: &str, content: &str) -> String {
    format!(
        r#"<article class="module-detail">
  <header class="module-header">
    <span class="eyebrow">Module</span>
    <h2>{title}</h2>
  </header>
  <div class="module-body">{content}</div>
</article>"#,
        title = clean_text(title),
        content = content,
    )
}

/// Full-panel notice with a heading and one line of text.
pub fn notice(title: &str, message: &str) -> String {
    format!(
        r#"<article class="notice-panel">
  <h3>{title}</h3>
  <p>{message}</p>
</article>"#,
        title = clean_text(title),
        message = clean_text(message),
    )
}

/// Notice shown when a module could not be loaded.
pub fn load_error(label: &str) -> String {
    notice(
        &format!("Could not open {}", label),
        "Check the file or try again later.",
    )
}

/// Notice for navigation entries that have no content yet.
pub fn under_construction(label: &str) -> String {
    notice(
        &format!("{} is under construction.", label),
        "Exercises and materials for this module are being prepared.",
    )
}

/// Landing page of a course, listing its practice repositories.
pub fn course_page<'a, I>(course: &Course, repos: I) -> String
where
    I: IntoIterator<Item = &'a RepoSource>,
{
    let cards: String = repos
        .into_iter()
        .map(|repo| {
            format!(
                r#"
      <button class="resource-card" data-action="open-repo" data-repo="{id}">
        <span class="resource-icon" aria-hidden="true">&#128230;</span>
        <span class="resource-text">
          <h3>{title}</h3>
          <p>{description}</p>
        </span>
        <span class="resource-arrow" aria-hidden="true">&rarr;</span>
      </button>"#,
                id = clean_text(repo.id),
                title = clean_text(repo.title),
                description = clean_text(repo.description),
            )
        })
        .collect();

    let resources = if cards.is_empty() {
        r#"<p class="empty-state">No practice repositories yet.</p>"#.to_string()
    } else {
        format!(r#"<div class="resource-grid">{}
    </div>"#, cards)
    };

    format!(
        r#"<article class="module-detail">
  <header class="module-header">
    <span class="eyebrow">Module</span>
    <h2>{title}</h2>
    <p>{summary}</p>
  </header>
  <section class="module-section">
    <span class="eyebrow">Learning outcomes</span>
    <div class="ra-card placeholder">
      <span>Coming soon...</span>
      <p>Learning outcome quizzes will be available here.</p>
    </div>
  </section>
  <section class="module-section">
    <span class="eyebrow">Practice resources</span>
    {resources}
  </section>
</article>"#,
        title = clean_text(course.title),
        summary = clean_text(course.summary),
        resources = resources,
    )
}

/// Notebook directory page body.
pub fn notebook_page(notebooks: &[Notebook]) -> String {
    let entries = if notebooks.is_empty() {
        r#"<div class="empty-state">
      <p>No notebooks are available at the moment.</p>
    </div>"#
            .to_string()
    } else {
        notebooks
            .iter()
            .map(|nb| {
                format!(
                    r#"
    <article class="notebook-card">
      <span class="eyebrow">Notebook</span>
      <h3>{name}</h3>
      <p>{description}</p>
      <a href="{link}" target="_blank" rel="noopener" data-notebook="{key}" data-open="direct">Open notebook</a>
    </article>"#,
                    name = clean_text(nb.name),
                    description = clean_text(nb.description),
                    link = clean_text(nb.link),
                    key = clean_text(nb.key),
                )
            })
            .collect()
    };

    format!(
        r#"<p>Links to the notebooks of each subject.</p>
  <div class="notebook-grid">{}</div>"#,
        entries
    )
}
