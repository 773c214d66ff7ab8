//! Entry point tying configuration, session and resource facades together

use crate::api::{AuthApi, DashboardApi, LcsApi, MarketingApi, ProductsApi, Resource};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::session::{SessionManager, SessionStore};
use shared::models::{
    Bill, BillInput, BookPo, BookPoInput, Customer, CustomerInput, Expense, ExpenseInput, Income,
    IncomeInput, Parcel, ParcelInput, ReturnInput, ReturnRecord, Sale, SaleInput, Seller,
    SellerInput,
};

/// Etimad Mart API client
///
/// ```no_run
/// use mart_client::{ClientConfig, MartClient};
///
/// # async fn example() -> Result<(), mart_client::ClientError> {
/// let client = MartClient::new(ClientConfig::from_env()?)?;
/// client.auth().login("admin@etimad.pk", "secret123").await?;
/// let low = client.products().low_stock().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MartClient {
    http: HttpClient,
}

impl MartClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let store = config.session_dir.clone().map(SessionStore::new);
        let session = SessionManager::new(store, config.token.clone());
        Ok(Self {
            http: HttpClient::new(config, session)?,
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub fn session(&self) -> &SessionManager {
        self.http.session()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.http)
    }

    pub fn customers(&self) -> Resource<'_, Customer, CustomerInput> {
        Resource::new(&self.http, "customers")
    }

    pub fn sellers(&self) -> Resource<'_, Seller, SellerInput> {
        Resource::new(&self.http, "sellers")
    }

    pub fn bills(&self) -> Resource<'_, Bill, BillInput> {
        Resource::new(&self.http, "bills")
    }

    pub fn parcels(&self) -> Resource<'_, Parcel, ParcelInput> {
        Resource::new(&self.http, "parcels")
    }

    pub fn book_po(&self) -> Resource<'_, BookPo, BookPoInput> {
        Resource::new(&self.http, "book-po")
    }

    pub fn sales(&self) -> Resource<'_, Sale, SaleInput> {
        Resource::new(&self.http, "sales")
    }

    pub fn returns(&self) -> Resource<'_, ReturnRecord, ReturnInput> {
        Resource::new(&self.http, "returns")
    }

    pub fn expenses(&self) -> Resource<'_, Expense, ExpenseInput> {
        Resource::new(&self.http, "expenses")
    }

    pub fn income(&self) -> Resource<'_, Income, IncomeInput> {
        Resource::new(&self.http, "income")
    }

    pub fn marketing(&self) -> MarketingApi<'_> {
        MarketingApi::new(&self.http)
    }

    pub fn lcs(&self) -> LcsApi<'_> {
        LcsApi::new(&self.http)
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(&self.http)
    }
}
