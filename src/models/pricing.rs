//! Pricing table
//!
//! Maps every plan and every add-on to a monthly and a yearly price. The
//! table is immutable once built: either the built-in catalog or a file
//! loaded at startup.
//!
//! ## File format
//!
//! YAML (`.yaml`/`.yml`) or JSON (`.json`), prices in whole currency units:
//!
//! ```yaml
//! plans:
//!   arcade:   { monthly: 9,  yearly: 90 }
//!   advanced: { monthly: 12, yearly: 120 }
//!   pro:      { monthly: 15, yearly: 150 }
//! addons:
//!   online-service: { monthly: 1, yearly: 10 }
//!   larger-storage: { monthly: 2, yearly: 20 }
//!   custom-profile: { monthly: 2, yearly: 20 }
//! ```
//!
//! Every plan and add-on must be present; unknown keys are rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::addon::Addon;
use super::billing::BillingCycle;
use super::money::Money;
use super::plan::Plan;
use crate::error::{SignupError, SignupResult};

/// Monthly and yearly price of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Price {
    pub monthly: Money,
    pub yearly: Money,
}

impl Price {
    /// Build a price from whole currency units
    pub const fn units(monthly: i64, yearly: i64) -> Self {
        Self {
            monthly: Money::from_units(monthly),
            yearly: Money::from_units(yearly),
        }
    }

    /// Price for the given billing cycle
    pub fn for_cycle(&self, cycle: BillingCycle) -> Money {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Yearly => self.yearly,
        }
    }
}

/// Price of every plan and add-on, indexed by `Plan::index` / `Addon::index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTable {
    plans: [Price; 3],
    addons: [Price; 3],
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PricingTable {
    /// The built-in catalog
    pub const fn builtin() -> Self {
        Self {
            plans: [
                Price::units(9, 90),
                Price::units(12, 120),
                Price::units(15, 150),
            ],
            addons: [
                Price::units(1, 10),
                Price::units(2, 20),
                Price::units(2, 20),
            ],
        }
    }

    /// Both prices of a plan
    pub fn plan(&self, plan: Plan) -> Price {
        self.plans[plan.index()]
    }

    /// Both prices of an add-on
    pub fn addon(&self, addon: Addon) -> Price {
        self.addons[addon.index()]
    }

    /// Plan price for a billing cycle
    pub fn plan_price(&self, plan: Plan, cycle: BillingCycle) -> Money {
        self.plan(plan).for_cycle(cycle)
    }

    /// Add-on price for a billing cycle
    pub fn addon_price(&self, addon: Addon, cycle: BillingCycle) -> Money {
        self.addon(addon).for_cycle(cycle)
    }

    /// Load a pricing file, choosing the parser from the file extension
    pub fn load(path: &Path) -> SignupResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SignupError::Io(format!(
                "Failed to read pricing file {}: {}",
                path.display(),
                e
            ))
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let table = match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents)?,
            Some("yaml" | "yml") => Self::from_yaml_str(&contents)?,
            _ => {
                return Err(SignupError::Config(format!(
                    "Unsupported pricing file type: {} (expected .yaml, .yml or .json)",
                    path.display()
                )))
            }
        };

        tracing::debug!(path = %path.display(), "loaded pricing table");
        Ok(table)
    }

    /// Parse a YAML pricing document
    pub fn from_yaml_str(yaml: &str) -> SignupResult<Self> {
        let file: PricingFile = serde_yaml::from_str(yaml)?;
        file.into_table()
    }

    /// Parse a JSON pricing document
    pub fn from_json_str(json: &str) -> SignupResult<Self> {
        let file: PricingFile = serde_json::from_str(json)?;
        file.into_table()
    }

    /// Render this table as a YAML pricing document
    ///
    /// Fractional prices are truncated to whole units, matching the file
    /// format.
    pub fn to_yaml_string(&self) -> SignupResult<String> {
        Ok(serde_yaml::to_string(&PricingFile::from_table(self))?)
    }
}

/// Largest accepted price in whole units
///
/// Keeps a plan plus every add-on well inside `Money`'s range.
pub const MAX_PRICE_UNITS: i64 = 1_000_000_000_000;

/// On-disk shape of a pricing document
#[derive(Debug, Serialize, Deserialize)]
struct PricingFile {
    plans: BTreeMap<String, PriceEntry>,
    addons: BTreeMap<String, PriceEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PriceEntry {
    monthly: i64,
    yearly: i64,
}

impl PriceEntry {
    fn into_price(self, item: &str) -> SignupResult<Price> {
        if self.monthly < 0 || self.yearly < 0 {
            return Err(SignupError::Pricing(format!(
                "Negative price for '{}'",
                item
            )));
        }
        if self.monthly > MAX_PRICE_UNITS || self.yearly > MAX_PRICE_UNITS {
            return Err(SignupError::Pricing(format!(
                "Price too large for '{}'",
                item
            )));
        }
        Ok(Price::units(self.monthly, self.yearly))
    }
}

impl From<Price> for PriceEntry {
    fn from(price: Price) -> Self {
        Self {
            monthly: price.monthly.units(),
            yearly: price.yearly.units(),
        }
    }
}

impl PricingFile {
    fn into_table(self) -> SignupResult<PricingTable> {
        let mut plans: [Option<Price>; 3] = [None; 3];
        for (key, entry) in &self.plans {
            let plan = Plan::parse(key)
                .ok_or_else(|| SignupError::Pricing(format!("Unknown plan '{}'", key)))?;
            plans[plan.index()] = Some(entry.into_price(key)?);
        }

        let mut addons: [Option<Price>; 3] = [None; 3];
        for (key, entry) in &self.addons {
            let addon = Addon::parse(key)
                .ok_or_else(|| SignupError::Pricing(format!("Unknown add-on '{}'", key)))?;
            addons[addon.index()] = Some(entry.into_price(key)?);
        }

        let mut table = PricingTable::builtin();
        for plan in Plan::ALL {
            table.plans[plan.index()] = plans[plan.index()].ok_or_else(|| {
                SignupError::Pricing(format!("Missing price for plan '{}'", plan))
            })?;
        }
        for addon in Addon::ALL {
            table.addons[addon.index()] = addons[addon.index()].ok_or_else(|| {
                SignupError::Pricing(format!("Missing price for add-on '{}'", addon))
            })?;
        }

        Ok(table)
    }

    fn from_table(table: &PricingTable) -> Self {
        Self {
            plans: Plan::ALL
                .iter()
                .map(|p| (p.as_str().to_string(), table.plan(*p).into()))
                .collect(),
            addons: Addon::ALL
                .iter()
                .map(|a| (a.as_str().to_string(), table.addon(*a).into()))
                .collect(),
        }
    }
}
