use tracing::{debug, info};

use crate::client::GeoconnexClient;
use crate::error::GeoconnexResult;
use crate::queries::{datasets_for_pid_query, river_name_pid_query};
use crate::results::{Binding, NO_PID_FOUND, dataset_bindings, first_mainstem};

impl GeoconnexClient {
    /// Runs an arbitrary SPARQL query and returns the endpoint's JSON text unchanged.
    ///
    /// # Errors
    /// Propagates HTTP and invalid-JSON failures from [`GeoconnexClient::execute`].
    pub async fn explore(&self, sparql_query: &str) -> GeoconnexResult<String> {
        Ok(self.execute(sparql_query).await?.into_raw())
    }

    /// Resolves a river name to the PID of the first matching mainstem.
    ///
    /// Returns [`NO_PID_FOUND`] when no flowpath name contains `river_name`.
    ///
    /// # Errors
    /// Propagates query failures and malformed result sets.
    ///
    /// # Panics
    /// Panics when the endpoint returns an empty document or one without `results`.
    pub async fn pid_for_river_name(&self, river_name: &str) -> GeoconnexResult<String> {
        let response = self.execute(&river_name_pid_query(river_name)).await?;
        let pid = first_mainstem(response.json())?;
        match pid {
            Some(pid) => {
                info!(river_name, %pid, "resolved river name");
                Ok(pid)
            }
            None => {
                debug!(river_name, "no mainstem matched river name");
                Ok(NO_PID_FOUND.to_string())
            }
        }
    }

    /// Lists temperature datasets observed along the mainstem identified by `pid`.
    ///
    /// At most five rows come back; the cap is applied by the query itself.
    ///
    /// # Errors
    /// Propagates query failures and malformed result sets.
    ///
    /// # Panics
    /// Panics when the endpoint returns an empty document or one without `results`.
    pub async fn datasets_for_pid(&self, pid: &str) -> GeoconnexResult<Vec<Binding>> {
        let response = self.execute(&datasets_for_pid_query(pid)).await?;
        let datasets = dataset_bindings(response.json())?;
        debug!(pid, count = datasets.len(), "fetched datasets for PID");
        Ok(datasets)
    }
}
