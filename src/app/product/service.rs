//! 产品业务服务
//!
//! 每个操作都是 加载 -> 内存操作 -> (保存)，不在请求之间缓存任何数据。

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use url::Url;

use super::model::{NewProduct, Product, ProductPatch, ProductView};
use super::records;
use crate::config::{AppConfig, ConfigError};
use crate::core::error::CoreError;
use crate::infrastructure::store::ProductStore;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const IMAGE_NOT_SPECIFIED: &str = "Image not specified for this product";
pub const IMAGE_FILE_MISSING: &str = "Image file not found in images folder";

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    images_dir: PathBuf,
    public_base_url: Url,
}

impl ProductService {
    pub fn new(
        store: Arc<dyn ProductStore>,
        images_dir: impl Into<PathBuf>,
        public_base_url: Url,
    ) -> Self {
        Self {
            store,
            images_dir: images_dir.into(),
            public_base_url,
        }
    }

    pub fn from_config(
        store: Arc<dyn ProductStore>,
        config: &AppConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            store,
            config.storage.images_dir.clone(),
            config.server.public_base_url()?,
        ))
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub async fn list_products(&self) -> Result<Vec<ProductView>, CoreError> {
        let products = self.store.load().await?;
        Ok(products
            .into_iter()
            .map(|product| {
                let cover_image_url = self.cover_image_url(&product);
                ProductView::new(product, cover_image_url)
            })
            .collect())
    }

    /// 查找产品图片在图片目录中的路径
    pub async fn image_path(&self, id: u64) -> Result<PathBuf, CoreError> {
        let products = self.store.load().await?;
        let product = records::find_by_id(&products, id)
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        let file_name = product
            .image_file_name()
            .ok_or_else(|| CoreError::BadRequest(IMAGE_NOT_SPECIFIED.to_string()))?;

        let missing = || CoreError::NotFound(IMAGE_FILE_MISSING.to_string());
        let path = self.resolve_image(file_name).ok_or_else(missing)?;
        let is_file = tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(missing());
        }

        Ok(path)
    }

    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, CoreError> {
        let mut products = self.store.load().await?;
        let id = records::next_id(&products).ok_or_else(|| {
            CoreError::InternalServerError("No product id left to assign".to_string())
        })?;
        let product = new_product.into_product(id);

        records::insert_at_end(&mut products, product.clone());
        self.store.save(&products).await?;

        info!("创建产品 {}", product.id);
        Ok(product)
    }

    pub async fn update_product(&self, id: u64, patch: ProductPatch) -> Result<Product, CoreError> {
        let mut products = self.store.load().await?;
        let product = records::replace_by_id(&mut products, id, patch)
            .cloned()
            .ok_or_else(|| CoreError::NotFoundText(PRODUCT_NOT_FOUND.to_string()))?;

        self.store.save(&products).await?;

        info!("更新产品 {}", id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: u64) -> Result<(), CoreError> {
        let mut products = self.store.load().await?;
        if records::remove_by_id(&mut products, id) == 0 {
            return Err(CoreError::NotFoundText(PRODUCT_NOT_FOUND.to_string()));
        }

        self.store.save(&products).await?;

        info!("删除产品 {}", id);
        Ok(())
    }

    /// `<对外地址>/images/<转义后的封面文件名>`
    pub fn cover_image_url(&self, product: &Product) -> Option<String> {
        let file_name = product.cover_file_name()?;
        let mut url = self.public_base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("images")
            .push(file_name);
        Some(url.into())
    }

    /// 只接受单个普通文件名，拒绝任何会离开图片目录的路径
    fn resolve_image(&self, file_name: &str) -> Option<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Some(self.images_dir.join(name)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::MemoryStore;
    use serde_json::json;

    fn service(base: &str, products: Vec<Product>) -> ProductService {
        ProductService::new(
            Arc::new(MemoryStore::with_products(products)),
            "images",
            Url::parse(base).unwrap(),
        )
    }

    fn with_image(id: u64, image: &str) -> Product {
        Product::new(id).with_field("image", image)
    }

    #[test]
    fn test_cover_image_url() {
        let service = service("http://localhost:8989", vec![]);
        assert_eq!(
            service.cover_image_url(&with_image(1, "1.jpg")).as_deref(),
            Some("http://localhost:8989/images/1.jpg")
        );
        assert_eq!(
            service
                .cover_image_url(&with_image(2, "snake plant #2.jpg"))
                .as_deref(),
            Some("http://localhost:8989/images/snake%20plant%20%232.jpg")
        );
        assert_eq!(service.cover_image_url(&Product::default()), None);
    }

    #[test]
    fn test_cover_image_url_keeps_base_path() {
        let service = service("https://cdn.example.com/shop/", vec![]);
        assert_eq!(
            service.cover_image_url(&with_image(1, "a/b.jpg")).as_deref(),
            Some("https://cdn.example.com/shop/images/a%2Fb.jpg")
        );
    }

    #[test]
    fn test_resolve_image_rejects_traversal() {
        let service = service("http://localhost:8989", vec![]);
        assert_eq!(
            service.resolve_image("1.jpg"),
            Some(PathBuf::from("images").join("1.jpg"))
        );
        assert_eq!(service.resolve_image("../data.json"), None);
        assert_eq!(service.resolve_image("nested/1.jpg"), None);
        assert_eq!(service.resolve_image("/etc/passwd"), None);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let service = service("http://localhost:8989", vec![with_image(4, "4.jpg")]);
        let created = service
            .create_product(NewProduct::from(json!({"name": "Ivy"})))
            .await
            .unwrap();
        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_create_fails_when_ids_run_out() {
        let service = service(
            "http://localhost:8989",
            vec![with_image(u64::MAX, "last.jpg")],
        );
        let result = service.create_product(NewProduct::default()).await;
        assert!(matches!(result, Err(CoreError::InternalServerError(_))));
        assert_eq!(service.store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_image_without_file_name_is_bad_request() {
        let service = service(
            "http://localhost:8989",
            vec![Product::new(1), Product::new(3).with_field("image", 3)],
        );
        assert!(matches!(
            service.image_path(3).await,
            Err(CoreError::BadRequest(_))
        ));
        assert!(matches!(
            service.image_path(1).await,
            Err(CoreError::BadRequest(_))
        ));
        assert!(matches!(
            service.image_path(2).await,
            Err(CoreError::NotFound(_))
        ));
    }
}
