//! Shared fixtures for the integration tests: fixture HTML for every page
//! type the fetchers consume, plus a card factory.

#![allow(dead_code)]

use pocket_tcg_sdk::models::Card;

/// Opt-in log capture: run with `RUST_LOG=debug` to see the skip/fallback
/// logging from the boundary tests.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Detail page with no structured attack regions: the condensed text probe
/// supplies the attack.
pub const PIKACHU_DETAIL_HTML: &str = r#"<html><body>
<div class="card-page">
  <div class="card-image"><img src="https://images.example.com/A2b/22.png"></div>
  <div class="card-details">
    Pikachu ex - Lightning - 120 HP Pok&#233;mon - Basic LLL Thunderbolt 150
    Discard all Energy from this Pok&#233;mon. Weakness: Fighting Retreat: 1
    ex rule: When your Pok&#233;mon ex is Knocked Out, your opponent gets 2 points.
    Illustrated by PLANETA Igarashi
  </div>
  <div class="card-rarity">Double Rare</div>
</div>
</body></html>"#;

/// Detail page with structured attack regions: their extraction replaces
/// the text probe's single-attack guess.
pub const CHARIZARD_DETAIL_HTML: &str = r#"<html><body>
<div class="card-page">
  <div class="card-image"><img src="https://images.example.com/A2b/10.png"></div>
  <div class="card-details">
    Charizard ex - Fire - 180 HP Pok&#233;mon - Stage 2 FF Slash 60
    Weakness: Water Retreat: 2
    ex rule: When your Pok&#233;mon ex is Knocked Out, your opponent gets 2 points.
    Illustrated by danciao
  </div>
  <div class="card-text-attack-info">
    <img class="energy-symbol" src="/img/energy/fire.png" alt="Fire Energy">
    <img class="energy-symbol" src="/img/energy/colorless.png" alt="Colorless Energy">
    <span class="attack-name">Slash</span> 60
  </div>
  <div class="card-text-attack-effect"></div>
  <div class="card-text-attack-info">
    <img class="energy-symbol" src="/img/energy/fire.png" alt="">
    <img class="energy-symbol" src="/img/energy/fire.png" alt="">
    Crimson Storm 200
  </div>
  <div class="card-text-attack-effect">Discard 2 Fire Energy from this Pok&#233;mon.</div>
  <div class="card-rarity">Crown Rare</div>
</div>
</body></html>"#;

pub const SEARCH_PAGE_HTML: &str = r#"<html><body>
<div class="card-search-grid">
  <a href="/cards/A1/1">
    <img src="/img/cards/A1/1.png">
    <span class="card-name">Bulbasaur</span>
    <span class="card-type">Grass</span>
  </a>
  <a href="/cards/A2b/22">
    <img src="/img/cards/A2b/22.png">
    <span class="card-name">Pikachu ex</span>
    <span class="card-type">Lightning</span>
  </a>
  <a href="/about"><img src="/img/banner.png"></a>
</div>
</body></html>"#;

pub const BROWSE_PAGE_HTML: &str = r#"<html><body>
<div class="browse">
  <div class="card-browse-result">
    <a href="/cards/A1/1"><img src="/img/cards/A1/1.png"></a>
    <span class="card-name">Bulbasaur</span>
    <span class="card-type">Grass</span>
  </div>
  <div class="card-browse-result">
    <a href="/cards/A1/2"><img src="/img/cards/A1/2.png"></a>
    <span class="card-name">Ivysaur</span>
    <span class="card-type">Grass</span>
  </div>
  <div class="card-browse-result">
    <a href="/news/today"><img src="/img/news.png"></a>
  </div>
</div>
</body></html>"#;

pub const SET_PAGE_HTML: &str = r#"<html><body>
<div class="set-listing">
  <div class="card-set-result">
    <a href="/cards/A2b/22"><img src="/img/cards/A2b/22.png"></a>
    <span class="card-name">Pikachu ex</span>
    <span class="card-type">Lightning</span>
  </div>
  <div class="card-set-result">
    <a href="/cards/A2b/10"><img src="/img/cards/A2b/10.png"></a>
    <span class="card-name">Charizard ex</span>
    <span class="card-type">Fire</span>
  </div>
</div>
</body></html>"#;

pub const SETS_PAGE_HTML: &str = r#"<html><body>
<ul>
  <li class="set-item"><a href="/sets/A1"><span class="set-name">Genetic Apex</span></a></li>
  <li class="set-item"><a href="/sets/A2b"><span class="set-name">Shining Revelry</span></a></li>
  <li class="set-item"><a href="/promo"><span class="set-name">Promos</span></a></li>
</ul>
</body></html>"#;

/// A minimal card for cache and deck tests.
pub fn sample_card(set_id: &str, id: &str, name: &str, category: &str) -> Card {
    let mut card = Card::partial(set_id, id, name, "Lightning", "");
    card.category = category.to_string();
    card
}
