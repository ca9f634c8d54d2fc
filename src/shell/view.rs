use askama::Template;
use chefmenu_menu::{MenuOverview, MenuQuery};
use chefmenu_shared::{CourseCounts, CourseFilter, MenuItem};

#[derive(Template)]
#[template(path = "shell/splash.txt")]
pub struct SplashView;

#[derive(Template)]
#[template(path = "shell/home.txt")]
pub struct HomeView<'a> {
    pub currency: &'a str,
    pub overview: &'a MenuOverview,
}

#[derive(Template)]
#[template(path = "shell/filter.txt")]
pub struct FilterView<'a> {
    pub currency: &'a str,
    pub filter: CourseFilter,
    pub search: &'a str,
    pub query: &'a MenuQuery,
}

/// Item list of the add screen, with ids to remove by
#[derive(Template)]
#[template(path = "shell/list.txt")]
pub struct ListView<'a> {
    pub currency: &'a str,
    pub counts: CourseCounts,
    pub items: &'a [MenuItem],
}

#[derive(Template)]
#[template(path = "shell/card.txt")]
pub struct CardView<'a> {
    pub currency: &'a str,
    pub item: &'a MenuItem,
}
