use craftique::{account::Identity, navigation::Page};
use craftique_ui::{
    component::{button, card, separation, stat_card, text},
    theme,
    widget::*,
};
use iced::{widget::Space, Length};

use crate::state::Msg;

pub const WELCOME: &str = "Welcome to Craftique, the artisan's marketplace.";
const FEATURED_COUNT: u32 = 4;

pub fn greeting(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("Hello, {}", identity.display_name),
        None => WELCOME.to_string(),
    }
}

/// Price in dollars of the n-th featured item, counted from 1.
pub fn featured_price(n: u32) -> u32 {
    30 + 5 * n.saturating_sub(1)
}

pub fn landing_view<'a>(identity: Option<&Identity>) -> Element<'a, Msg> {
    let featured = (1..=FEATURED_COUNT).fold(Row::new().spacing(20), |row, n| {
        row.push(
            card(
                Column::new()
                    .spacing(8)
                    .push(
                        Container::new(Space::with_height(Length::Fixed(120.0)))
                            .width(Length::Fill)
                            .style(theme::card::stat),
                    )
                    .push(text::p1_bold(format!("Unique Craft #{}", n)))
                    .push(
                        text::p1_bold(format!("${:.2}", featured_price(n) as f64))
                            .style(theme::text::accent),
                    )
                    .push(button::primary("View Product").on_press(Msg::Navigate(Page::Products))),
            )
            .padding(15)
            .width(Length::Fill),
        )
    });

    Column::new()
        .spacing(25)
        .push(text::h1(greeting(identity)).style(theme::text::accent))
        .push_maybe(identity.map(|_| {
            Row::new()
                .spacing(20)
                .push(stat_card("Orders Placed", 12))
                .push(stat_card("Wishlist Items", 5))
                .push(stat_card("Recent Cart Value", "$149"))
        }))
        .push(
            Column::new()
                .spacing(10)
                .push(text::h2("Featured Handicrafts"))
                .push(separation()),
        )
        .push(featured)
        .into()
}
