//! Route table and path resolution.
//!
//! The site has a fixed, compile-time set of pages. [`resolve`] maps any
//! requested path to exactly one [`Page`]; paths nobody registered land on
//! [`Page::NotFound`] instead of failing. Blog post paths (`/blog/:id`) are
//! registered but deliberately left as a placeholder page.
//!
//! The navigation menu ([`menu`]) is a separate tree from the route table:
//! it groups some routes under a dropdown and links to `/ctf-challenges`,
//! which has no page and therefore resolves to `NotFound`.

/// A page the router can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Blog,
    Contact,
    Certifications,
    Tools,
    /// `/blog/:id`. Rendered as a placeholder.
    BlogPost(String),
    NotFound,
}

impl Page {
    /// Every top-level page with a fixed path, in menu order.
    pub const STATIC: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Blog,
        Page::Contact,
        Page::Certifications,
        Page::Tools,
    ];

    /// Canonical URL path for this page. `NotFound` has none.
    pub fn path(&self) -> Option<String> {
        let p = match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Blog => "/blog",
            Page::Contact => "/contact",
            Page::Certifications => "/certifications",
            Page::Tools => "/tools",
            Page::BlogPost(id) => return Some(format!("/blog/{id}")),
            Page::NotFound => return None,
        };
        Some(p.to_string())
    }

    /// File the page is written to, relative to the output root.
    pub fn output_file(&self) -> String {
        match self.path() {
            Some(p) if p == "/" => "index.html".to_string(),
            Some(p) => format!("{}/index.html", p.trim_start_matches('/')),
            None => "404.html".to_string(),
        }
    }

    /// Short title used in `<title>` and CLI output.
    pub fn title(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
            Page::Certifications => "Certifications",
            Page::Tools => "Tools",
            Page::BlogPost(_) => "Blog Post",
            Page::NotFound => "Not Found",
        }
    }
}

/// Resolve a requested path to the page that renders it.
///
/// Accepts `"/about"`, `"/about/"`, `"about"` and `"/about/index.html"` as the
/// same route. Query strings and fragments are ignored.
pub fn resolve(path: &str) -> Page {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix("index.html").unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Page::Home,
        ["about"] => Page::About,
        ["projects"] => Page::Projects,
        ["blog"] => Page::Blog,
        ["contact"] => Page::Contact,
        ["certifications"] => Page::Certifications,
        ["tools"] => Page::Tools,
        ["blog", id] => Page::BlogPost((*id).to_string()),
        _ => Page::NotFound,
    }
}

/// A navigation menu entry: a link, or a dropdown group of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub name: &'static str,
    /// `None` for dropdown groups.
    pub path: Option<&'static str>,
    pub children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    fn link(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path: Some(path),
            children: Vec::new(),
        }
    }

    fn group(name: &'static str, children: Vec<RouteDefinition>) -> Self {
        Self {
            name,
            path: None,
            children,
        }
    }

    pub fn is_dropdown(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when this entry (or one of its children) links to `page`.
    pub fn is_active(&self, page: &Page) -> bool {
        match self.path {
            Some(p) => page.path().as_deref() == Some(p),
            None => self.children.iter().any(|c| c.is_active(page)),
        }
    }
}

/// The navbar tree, in display order.
pub fn menu() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::link("Home", "/"),
        RouteDefinition::link("About", "/about"),
        RouteDefinition::group(
            "Work",
            vec![
                RouteDefinition::link("Projects", "/projects"),
                RouteDefinition::link("Certifications", "/certifications"),
                RouteDefinition::link("Tools", "/tools"),
            ],
        ),
        RouteDefinition::link("Blog", "/blog"),
        RouteDefinition::link("CTF Challenges", "/ctf-challenges"),
        RouteDefinition::link("Contact", "/contact"),
    ]
}

/// All link paths in the menu, flattened depth-first.
pub fn menu_paths(items: &[RouteDefinition]) -> Vec<&'static str> {
    let mut out = Vec::new();
    for item in items {
        if let Some(p) = item.path {
            out.push(p);
        }
        out.extend(menu_paths(&item.children));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_static_page_round_trips_through_its_path() {
        for page in Page::STATIC {
            let path = page.path().unwrap();
            assert_eq!(resolve(&path), page, "path {path}");
        }
    }

    #[test]
    fn each_path_resolves_to_exactly_one_page() {
        for page in Page::STATIC {
            let path = page.path().unwrap();
            let hits: Vec<_> = Page::STATIC
                .iter()
                .filter(|p| **p == resolve(&path))
                .collect();
            assert_eq!(hits.len(), 1, "{path} matched {hits:?}");
        }
    }

    #[test]
    fn trailing_slash_and_index_are_normalized() {
        assert_eq!(resolve("/about/"), Page::About);
        assert_eq!(resolve("about"), Page::About);
        assert_eq!(resolve("/about/index.html"), Page::About);
        assert_eq!(resolve("/index.html"), Page::Home);
        assert_eq!(resolve(""), Page::Home);
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert_eq!(resolve("/tools?x=1"), Page::Tools);
        assert_eq!(resolve("/projects#top"), Page::Projects);
    }

    #[test]
    fn blog_post_path_is_placeholder_route() {
        assert_eq!(
            resolve("/blog/automated-pentesting"),
            Page::BlogPost("automated-pentesting".into())
        );
    }

    #[test]
    fn unregistered_paths_are_not_found() {
        assert_eq!(resolve("/ctf-challenges"), Page::NotFound);
        assert_eq!(resolve("/projects/encryption-tamil-rsa"), Page::NotFound);
        assert_eq!(resolve("/blog/a/b"), Page::NotFound);
    }

    #[test]
    fn output_files() {
        assert_eq!(Page::Home.output_file(), "index.html");
        assert_eq!(Page::Tools.output_file(), "tools/index.html");
        assert_eq!(
            Page::BlogPost("x".into()).output_file(),
            "blog/x/index.html"
        );
        assert_eq!(Page::NotFound.output_file(), "404.html");
    }

    #[test]
    fn menu_has_work_dropdown() {
        let items = menu();
        let work = items.iter().find(|i| i.name == "Work").unwrap();
        assert!(work.is_dropdown());
        assert_eq!(work.path, None);
        assert_eq!(
            menu_paths(&work.children),
            vec!["/projects", "/certifications", "/tools"]
        );
    }

    #[test]
    fn menu_links_resolve_or_fall_back() {
        let paths = menu_paths(&menu());
        let not_found: Vec<_> = paths
            .iter()
            .filter(|p| resolve(p) == Page::NotFound)
            .collect();
        assert_eq!(not_found, vec![&"/ctf-challenges"]);
    }

    #[test]
    fn group_is_active_when_child_is() {
        let items = menu();
        let work = items.iter().find(|i| i.name == "Work").unwrap();
        assert!(work.is_active(&Page::Tools));
        assert!(!work.is_active(&Page::Blog));
    }
}
