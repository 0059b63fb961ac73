#[derive(Debug, PartialEq)]
pub enum CartServiceError {
    InvalidQuantity,
    ProductNotFound,
    ProductUnavailable,
    ItemNotFound,
    PermissionDenied,
    DatabaseError,
}

impl std::error::Error for CartServiceError {}

impl std::fmt::Display for CartServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartServiceError::InvalidQuantity => write!(f, "Quantity must be at least 1"),
            CartServiceError::ProductNotFound => write!(f, "Product not found"),
            CartServiceError::ProductUnavailable => write!(f, "Product is not available"),
            CartServiceError::ItemNotFound => write!(f, "Cart item not found"),
            CartServiceError::PermissionDenied => write!(f, "Permission denied"),
            CartServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum OrderServiceError {
    OrderNotFound,
    EmptyCart,
    ProductNotFound,
    ProductUnavailable,
    InvalidQuantity,
    PermissionDenied,
    InvalidStatusTransition,
    OrderCreationFailed,
    OrderUpdateFailed,
    DatabaseError,
}

impl std::error::Error for OrderServiceError {}

impl std::fmt::Display for OrderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderServiceError::OrderNotFound => write!(f, "Order not found"),
            OrderServiceError::EmptyCart => write!(f, "Cart is empty"),
            OrderServiceError::ProductNotFound => write!(f, "Product not found"),
            OrderServiceError::ProductUnavailable => write!(f, "Product is not available"),
            OrderServiceError::InvalidQuantity => write!(f, "Quantity must be at least 1"),
            OrderServiceError::PermissionDenied => write!(f, "Permission denied"),
            OrderServiceError::InvalidStatusTransition => write!(f, "Invalid status transition"),
            OrderServiceError::OrderCreationFailed => write!(f, "Order creation failed"),
            OrderServiceError::OrderUpdateFailed => write!(f, "Order update failed"),
            OrderServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CardOrderServiceError {
    CardOrderNotFound,
    CardTypeNotFound,
    CardTypeUnavailable,
    InvalidQuantity,
    MissingDesign,
    PermissionDenied,
    InvalidStatusTransition,
    CardOrderCreationFailed,
    CardOrderUpdateFailed,
    DatabaseError,
}

impl std::error::Error for CardOrderServiceError {}

impl std::fmt::Display for CardOrderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardOrderServiceError::CardOrderNotFound => write!(f, "Card order not found"),
            CardOrderServiceError::CardTypeNotFound => write!(f, "Card type not found"),
            CardOrderServiceError::CardTypeUnavailable => write!(f, "Card type is not available"),
            CardOrderServiceError::InvalidQuantity => write!(f, "Quantity must be at least 1"),
            CardOrderServiceError::MissingDesign => write!(f, "A design file is required"),
            CardOrderServiceError::PermissionDenied => write!(f, "Permission denied"),
            CardOrderServiceError::InvalidStatusTransition => {
                write!(f, "Invalid status transition")
            }
            CardOrderServiceError::CardOrderCreationFailed => {
                write!(f, "Card order creation failed")
            }
            CardOrderServiceError::CardOrderUpdateFailed => write!(f, "Card order update failed"),
            CardOrderServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ProductServiceError {
    ProductNotFound,
    ProductAlreadyExists,
    ProductReferenced,
    CategoryNotFound,
    InvalidPrice,
    PermissionDenied,
    ProductCreationFailed,
    ProductUpdateFailed,
    ProductDeletionFailed,
    DatabaseError,
}

impl std::error::Error for ProductServiceError {}

impl std::fmt::Display for ProductServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductServiceError::ProductNotFound => write!(f, "Product not found"),
            ProductServiceError::ProductAlreadyExists => write!(f, "Product already exists"),
            ProductServiceError::ProductReferenced => {
                write!(f, "Product is referenced by carts or orders")
            }
            ProductServiceError::CategoryNotFound => write!(f, "Category not found"),
            ProductServiceError::InvalidPrice => write!(f, "Price must be greater than zero"),
            ProductServiceError::PermissionDenied => write!(f, "Permission denied"),
            ProductServiceError::ProductCreationFailed => write!(f, "Product creation failed"),
            ProductServiceError::ProductUpdateFailed => write!(f, "Product update failed"),
            ProductServiceError::ProductDeletionFailed => write!(f, "Product deletion failed"),
            ProductServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CategoryServiceError {
    CategoryNotFound,
    CategoryAlreadyExists,
    PermissionDenied,
    CategoryCreationFailed,
    CategoryUpdateFailed,
    CategoryDeletionFailed,
    DatabaseError,
}

impl std::error::Error for CategoryServiceError {}

impl std::fmt::Display for CategoryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryServiceError::CategoryNotFound => write!(f, "Category not found"),
            CategoryServiceError::CategoryAlreadyExists => write!(f, "Category already exists"),
            CategoryServiceError::PermissionDenied => write!(f, "Permission denied"),
            CategoryServiceError::CategoryCreationFailed => write!(f, "Category creation failed"),
            CategoryServiceError::CategoryUpdateFailed => write!(f, "Category update failed"),
            CategoryServiceError::CategoryDeletionFailed => write!(f, "Category deletion failed"),
            CategoryServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CardTypeServiceError {
    CardTypeNotFound,
    CardTypeAlreadyExists,
    InvalidPrice,
    PermissionDenied,
    CardTypeCreationFailed,
    CardTypeUpdateFailed,
    DatabaseError,
}

impl std::error::Error for CardTypeServiceError {}

impl std::fmt::Display for CardTypeServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardTypeServiceError::CardTypeNotFound => write!(f, "Card type not found"),
            CardTypeServiceError::CardTypeAlreadyExists => write!(f, "Card type already exists"),
            CardTypeServiceError::InvalidPrice => write!(f, "Price must be greater than zero"),
            CardTypeServiceError::PermissionDenied => write!(f, "Permission denied"),
            CardTypeServiceError::CardTypeCreationFailed => {
                write!(f, "Card type creation failed")
            }
            CardTypeServiceError::CardTypeUpdateFailed => write!(f, "Card type update failed"),
            CardTypeServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PaymentServiceError {
    OrderNotFound,
    OrderNotPending,
    AmountOverflow,
    GatewayUnavailable,
    PaymentFailed,
    PaymentIncomplete,
    DatabaseError,
}

impl std::error::Error for PaymentServiceError {}

impl std::fmt::Display for PaymentServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentServiceError::OrderNotFound => write!(f, "Order not found"),
            PaymentServiceError::OrderNotPending => {
                write!(f, "Order is not awaiting payment")
            }
            PaymentServiceError::AmountOverflow => {
                write!(f, "Order total cannot be expressed in minor units")
            }
            PaymentServiceError::GatewayUnavailable => write!(f, "Payment gateway unavailable"),
            PaymentServiceError::PaymentFailed => write!(f, "Payment failed"),
            PaymentServiceError::PaymentIncomplete => {
                write!(f, "Payment has not completed yet")
            }
            PaymentServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SaleServiceError {
    PermissionDenied,
    SaleCreationFailed,
    DatabaseError,
}

impl std::error::Error for SaleServiceError {}

impl std::fmt::Display for SaleServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleServiceError::PermissionDenied => write!(f, "Permission denied"),
            SaleServiceError::SaleCreationFailed => write!(f, "Sale record creation failed"),
            SaleServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NewsletterServiceError {
    InvalidEmail,
    PermissionDenied,
    DatabaseError,
}

impl std::error::Error for NewsletterServiceError {}

impl std::fmt::Display for NewsletterServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsletterServiceError::InvalidEmail => write!(f, "Invalid email address"),
            NewsletterServiceError::PermissionDenied => write!(f, "Permission denied"),
            NewsletterServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}
