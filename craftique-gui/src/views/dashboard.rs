use craftique::{
    account::{Identity, Role},
    navigation::Page,
};
use craftique_ui::{
    component::{button, stat_card, text},
    theme,
    widget::*,
};
use iced::Length;

use crate::state::Msg;

const SIDEBAR: [(Page, &str); 6] = [
    (Page::Dashboard, "Dashboard"),
    (Page::Products, "Products"),
    (Page::Orders, "Orders"),
    (Page::Wishlist, "Wishlist"),
    (Page::Cart, "Cart"),
    (Page::Profile, "Profile"),
];

pub fn greeting(identity: Option<&Identity>) -> String {
    format!(
        "Hello, {}!",
        identity.map(Identity::greeting_name).unwrap_or("User")
    )
}

pub fn role_banner(role: Role) -> String {
    format!("Welcome to your {} Dashboard.", role)
}

fn sidebar<'a>() -> Element<'a, Msg> {
    Container::new(SIDEBAR.iter().fold(Column::new().spacing(5), |col, &(page, label)| {
        let entry = if page == Page::Dashboard {
            button::menu_active(label)
        } else {
            button::menu(label)
        };
        col.push(entry.on_press(Msg::Navigate(page)))
    }))
    .padding(15)
    .width(Length::Fixed(220.0))
    .style(theme::card::sidebar)
    .into()
}

pub fn dashboard_view<'a>(identity: Option<&Identity>) -> Element<'a, Msg> {
    let role = identity.map(|i| i.role).unwrap_or_default();

    let main = Column::new()
        .spacing(25)
        .width(Length::Fill)
        .push(text::h1(greeting(identity)).style(theme::text::accent))
        .push(
            Container::new(
                Column::new()
                    .spacing(8)
                    .push(text::p1_bold(role_banner(role)))
                    .push(text::p2_regular(
                        "This is where your personalized analytics, order tracking, and quick management links will appear.",
                    )),
            )
            .padding(20)
            .width(Length::Fill)
            .style(theme::card::stat),
        )
        .push(text::h3("Quick Stats"))
        .push(
            Row::new()
                .spacing(20)
                .push(stat_card("Total Products", 45))
                .push(stat_card("Orders Received", 12))
                .push(stat_card("Pending Approvals", 3))
                .push(stat_card("Total Earnings", "$5,120")),
        );

    Row::new().spacing(30).push(sidebar()).push(main).into()
}
