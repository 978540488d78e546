mod common;
mod engine;
mod normalization;
