use crate::store::client::StoreClient;

#[derive(Clone)]
pub struct RestProjectRepo {
    pub client: StoreClient,
}

#[derive(Clone)]
pub struct RestSkillRepo {
    pub client: StoreClient,
}

#[derive(Clone)]
pub struct RestContactMessageRepo {
    pub client: StoreClient,
}

#[derive(Clone)]
pub struct RestAdminUserRepo {
    pub client: StoreClient,
}

#[derive(Clone)]
pub struct RestSessionRepo {
    pub client: StoreClient,
}
