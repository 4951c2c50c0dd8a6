// Parameterized unit tests for the public model types

mod models;
