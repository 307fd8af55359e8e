use std::path::Path;
use async_trait::async_trait;
use tokio::{fs, io};
use uuid::Uuid;
use crate::rng::make_uuid;

#[async_trait]
pub trait StoreIo: Send + Sync {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    async fn is_dir(&self, path: &Path) -> io::Result<bool>;

    async fn exists(&self, path: &Path) -> io::Result<bool>;

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    async fn write_file(&self, path: &Path, data: Vec<u8>) -> io::Result<()>;

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn generate_uuid(&self) -> Uuid;
}

#[derive(Debug, Default)]
pub struct ProductionStoreIo;

impl ProductionStoreIo {
    pub fn new() -> Self {
        ProductionStoreIo
    }
}

#[async_trait]
impl StoreIo for ProductionStoreIo {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::metadata(path).await?.is_dir())
    }

    async fn exists(&self, path: &Path) -> io::Result<bool> {
        fs::try_exists(path).await
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write_file(&self, path: &Path, data: Vec<u8>) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}
