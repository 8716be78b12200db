//! The navigation bar shared by every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
///
/// Only one link should have `is_current` set at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

/// Where a link is drawn: the header on wide screens or the tab bar pinned
/// to the bottom of narrow screens.
#[derive(Clone, Copy)]
enum Placement {
    Header,
    TabBar,
}

impl Link<'_> {
    fn class(&self, placement: Placement) -> &'static str {
        match (placement, self.is_current) {
            (Placement::Header, true) => {
                "rounded-md bg-emerald-50 px-3 py-2 text-sm font-semibold \
                text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-300"
            }
            (Placement::Header, false) => {
                "rounded-md px-3 py-2 text-sm font-medium text-slate-600 \
                hover:bg-slate-100 hover:text-slate-900 dark:text-slate-300 \
                dark:hover:bg-slate-800 dark:hover:text-white"
            }
            (Placement::TabBar, true) => {
                "flex flex-col items-center rounded-lg bg-emerald-50 py-2 \
                text-xs font-semibold text-emerald-700 \
                dark:bg-emerald-900/40 dark:text-emerald-300"
            }
            (Placement::TabBar, false) => {
                "flex flex-col items-center rounded-lg py-2 text-xs \
                font-medium text-slate-500 hover:text-emerald-700 \
                dark:text-slate-400 dark:hover:text-emerald-300"
            }
        }
    }

    fn render(&self, placement: Placement) -> Markup {
        html! {
            a
                href=(self.url)
                class=(self.class(placement))
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        }
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = [
            (endpoints::ROOT, "Expenses"),
            (endpoints::NEW_EXPENSE_VIEW, "Add Expense"),
            (endpoints::ANALYTICS_VIEW, "Analytics"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            header
                class="border-b border-slate-200 bg-white dark:border-slate-800 dark:bg-slate-900"
            {
                nav
                    class="mx-auto flex max-w-screen-lg items-center justify-between px-4 py-3"
                    aria-label="Main"
                {
                    a
                        href=(endpoints::ROOT)
                        class="text-xl font-bold tracking-tight text-slate-900 dark:text-white"
                    {
                        "Expense Tracker"
                    }

                    ul class="hidden items-center gap-2 lg:flex"
                    {
                        @for link in &self.links {
                            li { (link.render(Placement::Header)) }
                        }
                    }
                }
            }

            nav
                class="fixed inset-x-0 bottom-0 z-40 border-t border-slate-200
                    bg-white/95 backdrop-blur lg:hidden dark:border-slate-800
                    dark:bg-slate-900/95"
                aria-label="Tabs"
            {
                ul class="grid grid-cols-3 gap-2 px-4 py-2"
                {
                    @for link in &self.links {
                        li { (link.render(Placement::TabBar)) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use crate::{endpoints, navigation::NavBar};

    fn current_links(active_endpoint: &'static str) -> Vec<&'static str> {
        NavBar::new(active_endpoint)
            .links
            .into_iter()
            .filter(|link| link.is_current)
            .map(|link| link.title)
            .collect()
    }

    #[test]
    fn marks_matching_link_as_current() {
        assert_eq!(current_links(endpoints::ROOT), vec!["Expenses"]);
        assert_eq!(current_links(endpoints::NEW_EXPENSE_VIEW), vec!["Add Expense"]);
        assert_eq!(current_links(endpoints::ANALYTICS_VIEW), vec!["Analytics"]);
    }

    #[test]
    fn other_pages_have_no_current_link() {
        for endpoint in [
            endpoints::EXPENSES,
            endpoints::EDIT_EXPENSE_VIEW,
            endpoints::DELETE_EXPENSE,
            endpoints::INTERNAL_ERROR_VIEW,
            endpoints::EXPENSES_API,
            endpoints::ANALYTICS_API,
            endpoints::HEALTH,
        ] {
            assert!(
                current_links(endpoint).is_empty(),
                "no link should be current for {endpoint}"
            );
        }
    }

    #[test]
    fn renders_each_link_in_header_and_tab_bar() {
        let html = NavBar::new(endpoints::ANALYTICS_VIEW)
            .into_html()
            .into_string();

        assert_eq!(html.matches("href=\"/analytics\"").count(), 2);
        assert_eq!(html.matches("href=\"/expenses/new\"").count(), 2);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 2);
    }
}
