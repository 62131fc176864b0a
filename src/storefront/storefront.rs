use super::pagination::{InFlight, Pagination};
use super::view::{ListingView, ProfileView};
use super::StorefrontBuilder;
use crate::api::{referral_link, StorefrontAPI};
use crate::config::StorefrontConfig;
use crate::enums::{InvoiceStatus, Tab};
use crate::error::{Error, UnavailableReason};
use crate::host::Host;
use crate::request::{BindSteam, CreateInvoice};
use crate::response::{Item, Profile};
use crate::types::UserId;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const INVITE_TEXT: &str = "Invite a friend to CS2 Marketplace and get a skin for free!";

/// The result of asking for a page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and applied.
    Loaded {
        /// The number of items on the page.
        count: usize,
    },
    /// No request was made because one was already in flight or no more pages remain. A load
    /// skipped for an in-flight request is carried out by that request.
    Skipped,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) tab: Tab,
    pub(crate) items: Vec<Item>,
    pub(crate) pagination: Pagination,
    pub(crate) notice: Option<String>,
    pub(crate) listing_error: Option<String>,
    pub(crate) profile: ProfileView,
}

/// A storefront client for one user. Holds the volatile view state of the Mini App and performs
/// the actions a user can take. Failures are surfaced through [`Host::alert`] or the view state
/// and also returned so callers can inspect them.
///
/// Methods take `&self` so a "load more" can overlap with other actions; only one item
/// listing request is ever in flight.
pub struct Storefront<H> {
    pub(crate) api: StorefrontAPI,
    pub(crate) host: H,
    pub(crate) bot_username: String,
    pub(crate) page_size: u32,
    pub(crate) state: RwLock<State>,
    pub(crate) loading: InFlight,
}

impl<H> Storefront<H>
where
    H: Host,
{
    /// Builder for constructing a [`Storefront`].
    pub fn builder(api: StorefrontAPI, host: H) -> StorefrontBuilder<H> {
        StorefrontBuilder::new(api, host)
    }

    /// Creates a [`Storefront`] connecting to the backend described by `config`.
    pub fn from_config(config: &StorefrontConfig, host: H) -> Result<Self, Error> {
        StorefrontBuilder::from_config(config, host)
            .map(StorefrontBuilder::build)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn user_id(&self) -> Result<UserId, Error> {
        self.host.user_id().ok_or(Error::MissingUserId)
    }

    /// The host this storefront runs in.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.read_state().tab
    }

    /// What the profile tab shows.
    pub fn profile_view(&self) -> ProfileView {
        self.read_state().profile.clone()
    }

    /// What the marketplace tab shows.
    pub fn listing(&self) -> ListingView {
        let state = self.read_state();

        ListingView {
            items: state.items.clone(),
            has_more: state.pagination.has_more,
            page: state.pagination.page,
            query: state.pagination.query.clone(),
            notice: state.notice.clone(),
            error: state.listing_error.clone(),
            loading: self.loading.is_active(),
        }
    }

    /// Signals the host that the app is ready, loads the profile and shows the landing tab.
    pub async fn initialize(&self) -> Result<(), Error> {
        self.host.ready();
        self.host.hide_main_button();

        if let Ok(link) = self.referral_link() {
            log::debug!("Referral link: {link}");
        }

        self.load_profile().await;
        self.switch_tab(Tab::Landing).await
    }

    /// Shows `tab`. Entering the marketplace starts the listing over from the first page with an
    /// empty search.
    pub async fn switch_tab(&self, tab: Tab) -> Result<(), Error> {
        {
            let mut state = self.write_state();

            state.tab = tab;

            if tab == Tab::Marketplace {
                state.pagination.reset("");
            }
        }

        if tab == Tab::Marketplace {
            self.load_items().await?;
        }

        Ok(())
    }

    /// Loads the profile of the current user into the profile view.
    pub async fn load_profile(&self) -> ProfileView {
        let view = match self.user_id() {
            Ok(user_id) => match self.api.get_profile(user_id).await {
                Ok(profile) => ProfileView::Loaded(profile),
                Err(Error::NotActivated) => ProfileView::NotActivated,
                Err(error) => {
                    log::error!("Error loading profile: {error}");
                    ProfileView::Failed(error.user_message())
                },
            },
            Err(error) => ProfileView::Failed(error.to_string()),
        };

        self.write_state().profile = view.clone();

        view
    }

    /// Fetches the next page of items. The first page replaces the listing, later pages are
    /// appended. Makes no request if one is already in flight or there are no more pages.
    ///
    /// A search or tab reset made while the request is in flight is picked up by that request:
    /// its response is discarded and the first page of the new listing is fetched instead.
    pub async fn load_items(&self) -> Result<LoadOutcome, Error> {
        let Some(_guard) = self.loading.try_begin() else {
            log::debug!("Items are already loading");
            return Ok(LoadOutcome::Skipped);
        };

        loop {
            let (options, generation) = {
                let state = self.read_state();

                match state.pagination.next_request(self.page_size) {
                    Some(options) => (options, state.pagination.generation),
                    None => return Ok(LoadOutcome::Skipped),
                }
            };
            let result = self.api.get_items(&options).await;
            let mut state = self.write_state();

            if state.pagination.generation != generation {
                log::debug!("Discarding page {} for a previous search", options.page);
                continue;
            }

            return match result {
                Ok(page) => {
                    let count = page.items.len();

                    if options.page == 1 {
                        state.items = page.items;
                    } else {
                        state.items.extend(page.items);
                    }

                    state.pagination.advance(count, options.limit, page.pages);
                    state.notice = page.message;
                    state.listing_error = None;

                    Ok(LoadOutcome::Loaded { count })
                },
                Err(error) => {
                    log::error!("Error loading items: {error}");
                    state.listing_error = Some(error.user_message());
                    Err(error)
                },
            };
        }
    }

    /// Alias for [`Storefront::load_items`].
    pub async fn load_more(&self) -> Result<LoadOutcome, Error> {
        self.load_items().await
    }

    /// Starts the listing over from the first page, listing only items whose names contain
    /// `query`.
    pub async fn search(&self, query: &str) -> Result<LoadOutcome, Error> {
        self.write_state().pagination.reset(query);
        self.load_items().await
    }

    /// Binds a Steam profile and trade link to the current user. The trade link is validated
    /// before anything is sent.
    pub async fn bind_steam(&self, profile: &str, trade_link: &str) -> Result<(), Error> {
        let result = async {
            let user_id = self.user_id()?;
            let bind = BindSteam::new(profile, trade_link)?;

            self.api.bind_steam(user_id, &bind).await
        }.await;

        match result {
            Ok(()) => {
                self.host.alert("Steam linked successfully!").await;
                self.load_profile().await;
                Ok(())
            },
            Err(error) => self.fail("Failed to link Steam", error).await,
        }
    }

    /// Claims the current user's referral gift.
    pub async fn claim_gift(&self) -> Result<(), Error> {
        let result = async {
            let user_id = self.user_id()?;

            self.api.claim_gift(user_id).await
        }.await;

        match result {
            Ok(()) => {
                self.host.alert("Gift claimed!").await;
                self.load_profile().await;
                Ok(())
            },
            Err(error) => self.fail("Failed to claim gift", error).await,
        }
    }

    /// The link that invites others with the current user as the referrer.
    pub fn referral_link(&self) -> Result<String, Error> {
        Ok(referral_link(&self.bot_username, self.user_id()?))
    }

    /// Lets the user share their referral link in a chat of their choosing.
    pub fn share_referral_link(&self) -> Result<(), Error> {
        let link = self.referral_link()?;

        self.host.switch_inline_query(&format!("{INVITE_TEXT} {link}"));

        Ok(())
    }

    /// Buys `item` with Telegram Stars.
    ///
    /// The price must be positive and a trade link must be bound to the loaded profile. The
    /// item's price and stock and the marketplace's balance are checked against the backend
    /// before an invoice is requested, so a stale listing is never paid for. When the host
    /// reports the invoice paid, the profile and the listing are reloaded.
    pub async fn buy_item(&self, item: &Item) -> Result<InvoiceStatus, Error> {
        if item.price_stars == 0 {
            log::warn!("Refusing to buy {} without a price", item.name);
            self.host.alert("The price is not set").await;
            return Err(Error::Parameter("Price must be positive"));
        }

        let has_trade_link = self.read_state()
            .profile
            .profile()
            .is_some_and(Profile::has_trade_link);

        if !has_trade_link {
            log::warn!("Refusing to buy {} without a trade link", item.name);
            self.host.alert("Link your Steam trade link in the profile first").await;
            return Err(Error::TradeLinkNotBound);
        }

        let status = match self.checkout(item).await {
            Ok(status) => status,
            Err(error) => return self.fail("Payment error", error).await,
        };

        match status {
            InvoiceStatus::Paid => {
                self.host.alert("Payment successful! The item has been added to your profile.").await;
                self.load_profile().await;

                let query = self.read_state().pagination.query.clone();

                self.write_state().pagination.reset(query);

                if let Err(error) = self.load_items().await {
                    log::warn!("Error reloading items after purchase: {error}");
                }
            },
            InvoiceStatus::Failed | InvoiceStatus::Cancelled => {
                self.host.alert("Payment failed.").await;
            },
            InvoiceStatus::Pending => {
                log::debug!("Invoice for {} is pending", item.id);
            },
        }

        Ok(status)
    }

    async fn checkout(&self, item: &Item) -> Result<InvoiceStatus, Error> {
        let user_id = self.user_id()?;
        let product_id = item.product_id();

        if item.product_id.is_none() {
            log::warn!("Item {} has no product ID, using its name", item.id);
        }

        let balance = self.api.get_balance().await?;
        let quote = self.api.get_item_price(product_id).await?;

        if !quote.is_in_stock() {
            return Err(Error::Unavailable(UnavailableReason::OutOfStock));
        }

        if quote.price_stars != item.price_stars {
            self.reprice(item, quote.price_stars);

            return Err(Error::Unavailable(UnavailableReason::PriceChanged {
                listed: item.price_stars,
                current: quote.price_stars,
            }));
        }

        if quote.price_rub.is_some_and(|price_rub| balance.available < price_rub) {
            return Err(Error::Unavailable(UnavailableReason::InsufficientBalance));
        }

        let invoice = self.api.create_invoice(&CreateInvoice {
            item_id: item.id,
            product_id: product_id.to_string(),
            user_id,
            price_stars: quote.price_stars,
        }).await?;

        Ok(self.host.open_invoice(&invoice.invoice_link).await)
    }

    /// Updates the listed price of an item so the listing shows what it costs now.
    fn reprice(&self, item: &Item, price_stars: u32) {
        let mut state = self.write_state();

        for listed in state.items.iter_mut().filter(|listed| listed.id == item.id) {
            listed.price_stars = price_stars;
        }
    }

    async fn fail<T>(&self, context: &str, error: Error) -> Result<T, Error> {
        log::error!("{context}: {error}");
        self.host.alert(&format!("{context}: {}", error.user_message())).await;
        Err(error)
    }
}
