mod health_check;
mod navigation;
mod signup;
