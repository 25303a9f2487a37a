use tracing::{debug, info};

use crate::config::NewUserSpec;
use crate::errors::ProvisionError;
use crate::models::{CreateUser, is_reserved, target_databases};

/// The admin commands a provisioning run issues against the server.
#[async_trait::async_trait]
pub trait AdminOps {
    /// `listDatabases`, names only, in server order.
    async fn list_database_names(&self) -> Result<Vec<String>, ProvisionError>;

    /// `createUser` run against `database`.
    async fn create_user(&self, database: &str, command: &CreateUser) -> Result<(), ProvisionError>;
}

/// Lists the databases a run would provision, without changing anything.
///
/// # Returns
///
/// Every database name the server reports except `admin`, `config` and
/// `local`, in server order.
///
/// # Example
///
/// ```rust,no_run
/// let admin = MongoAdmin::connect(&config.admin).await?;
/// for database in provisioner::plan(&admin).await? {
///     println!("would provision {}", database);
/// }
/// ```
pub async fn plan<A>(ops: &A) -> Result<Vec<String>, ProvisionError>
where
    A: AdminOps + Sync,
{
    let names = ops.list_database_names().await?;

    for name in names.iter().filter(|name| is_reserved(name)) {
        debug!(database = %name, "Skipping reserved database");
    }

    Ok(target_databases(names))
}

/// Creates `new_user` with `readWrite` on every non-reserved database.
///
/// Stops at the first failure. Databases handled before it keep the user;
/// the rest are not attempted.
///
/// # Returns
///
/// The databases the user was created on, in the order they were handled.
///
/// # Example
///
/// ```rust,no_run
/// let admin = MongoAdmin::connect(&config.admin).await?;
/// let provisioned = provisioner::provision(&admin, &config.new_user).await?;
/// ```
pub async fn provision<A>(ops: &A, new_user: &NewUserSpec) -> Result<Vec<String>, ProvisionError>
where
    A: AdminOps + Sync,
{
    let targets = plan(ops).await?;
    let mut provisioned = Vec::with_capacity(targets.len());

    for database in targets {
        let command = CreateUser::read_write(&new_user.username, &new_user.password, &database);
        ops.create_user(&database, &command).await?;

        info!(user = %new_user.username, database = %database, "Granted readWrite");
        provisioned.push(database);
    }

    Ok(provisioned)
}
